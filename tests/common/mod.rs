#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

pub const RESULT_TABLE: &str = "SampleID\tHaplogroup\tRank\tQuality\n1001\tH1\t1\t0.93\n";

// Writing an executable while another test thread forks can make exec fail
// with ETXTBSY, so tests that create and run scripts take turns.
static SERIAL: Mutex<()> = Mutex::new(());

pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// Writes an executable `haplogrep3` shell script with the given body.
pub fn fake_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("haplogrep3");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
    path
}

/// A well-behaved tool: records its arguments (one per line) in `args.txt`
/// and writes a one-sample result table to the `--out` path.
pub fn recording_tool(dir: &Path) -> (PathBuf, PathBuf) {
    let args = dir.join("args.txt");
    let body = format!(
        "printf '%s\\n' \"$@\" > '{}'\n\
         if [ \"$1\" = \"classify\" ]; then\n\
         \x20 printf 'SampleID\\tHaplogroup\\tRank\\tQuality\\n1001\\tH1\\t1\\t0.93\\n' > \"$5\"\n\
         fi",
        args.display()
    );
    (fake_tool(dir, &body), args)
}

pub fn recorded_args(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read recorded args")
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn vcf(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(
        &path,
        "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\t1001\nchrM\t73\t.\tA\tG\t.\tPASS\t.\tGT\t1\n",
    )
    .expect("write vcf");
    path
}
