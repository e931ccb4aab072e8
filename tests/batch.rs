#![cfg(unix)]

mod common;

use haplogrep_wrapper::haplogrep::{ClassificationMetric, ClassifyOptions, Haplogrep3};

#[test]
fn missing_input_does_not_stop_the_batch() {
    let _serial = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let (tool, args_file) = common::recording_tool(dir.path());
    let wrapper = Haplogrep3::with_default_tree(&tool).unwrap();

    let inputs = vec![
        common::vcf(dir.path(), "1001.vcf"),
        dir.path().join("missing.vcf"),
        common::vcf(dir.path(), "1003.vcf"),
    ];
    let output_dir = dir.path().join("results").join("batch");
    let options = ClassifyOptions {
        metric: Some(ClassificationMetric::Kulczynski),
        hits: Some(3),
        ..ClassifyOptions::default()
    };

    let results = wrapper.classify_batch(&inputs, &output_dir, &options).unwrap();
    assert_eq!(results.len(), 3);

    assert!(results[0].success());
    assert_eq!(results[0].output_file(), output_dir.join("1001_haplogroups.txt"));
    assert!(output_dir.join("1001_haplogroups.txt").exists());

    assert!(!results[1].success());
    assert_eq!(results[1].output_file(), output_dir.join("missing_haplogroups.txt"));
    assert!(results[1].error_message().contains("missing.vcf"));

    assert!(results[2].success());
    assert!(output_dir.join("1003_haplogroups.txt").exists());

    // the last invocation carried the shared options
    let args = common::recorded_args(&args_file);
    assert_eq!(args[2], inputs[2].display().to_string());
    assert!(args.windows(2).any(|w| w == ["--metric", "kulczynski"]));
    assert!(args.windows(2).any(|w| w == ["--hits", "3"]));
}

#[test]
fn tool_failure_is_isolated_to_its_file() {
    let _serial = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let tool = common::fake_tool(
        dir.path(),
        "case \"$3\" in */bad.vcf) echo \"Error: cannot parse $3\"; exit 1;; esac\n\
         printf 'SampleID\\tHaplogroup\\n' > \"$5\"",
    );
    let wrapper = Haplogrep3::with_default_tree(&tool).unwrap();

    let inputs = vec![
        common::vcf(dir.path(), "bad.vcf"),
        common::vcf(dir.path(), "good.vcf"),
    ];
    let results = wrapper
        .classify_batch(&inputs, dir.path(), &ClassifyOptions::default())
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(!results[0].success());
    assert_eq!(results[0].exit_code(), 1);
    assert!(results[0].error_message().starts_with("Error: cannot parse"));
    assert!(results[1].success());
}

#[test]
fn empty_batch_still_creates_the_output_dir() {
    let _serial = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let (tool, _) = common::recording_tool(dir.path());
    let wrapper = Haplogrep3::with_default_tree(&tool).unwrap();

    let output_dir = dir.path().join("out");
    let inputs: Vec<std::path::PathBuf> = Vec::new();
    let results = wrapper
        .classify_batch(&inputs, &output_dir, &ClassifyOptions::default())
        .unwrap();
    assert!(results.is_empty());
    assert!(output_dir.is_dir());
}
