use clap::{Parser, Subcommand};
use haplogrep_wrapper::haplogrep::{ClassifyOptions, MetricChoice};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the haplogrep3 executable or haplogrep3.jar (overrides the config file)
    #[arg(long, global = true)]
    pub haplogrep: Option<PathBuf>,

    /// Log debug output, including the exact Haplogrep3 command lines
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the haplogroups of one VCF file
    Classify {
        /// Input VCF file
        input: PathBuf,
        /// Output file for haplogroup results
        output: PathBuf,
        #[command(flatten)]
        options: ClassifyOptions,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify several VCF files, one <stem>_haplogroups.txt per input
    Batch {
        /// Input VCF files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Directory for the result files (created if missing)
        #[arg(short = 'o', long = "output-dir")]
        output_dir: PathBuf,
        #[command(flatten)]
        options: ClassifyOptions,
        /// Print the result records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the classification trees available to Haplogrep3
    Trees {
        /// Print the built-in tree catalogue without running Haplogrep3
        #[arg(long)]
        known: bool,
    },

    /// Print a results file
    Show {
        /// Haplogrep3 output file
        output_file: PathBuf,
        /// Only print the first N lines
        #[arg(long)]
        lines: Option<usize>,
    },

    /// Upload-style analysis: classify a VCF and print a full report
    Analyze {
        /// VCF file to analyze
        vcf: PathBuf,
        /// Phylogenetic tree (defaults to the configured tree)
        #[arg(long)]
        tree: Option<String>,
        /// Similarity metric
        #[arg(long, value_enum, default_value_t = MetricChoice::Kulczynski)]
        metric: MetricChoice,
        /// Leave out the additional SNP information
        #[arg(long)]
        no_extend_report: bool,
        /// Number of best hits to report (1-10)
        #[arg(long, default_value = "3")]
        hits: u32,
        /// Heteroplasmy level threshold (0.0-1.0)
        #[arg(long = "het-level", default_value = "0.9")]
        het_level: f64,
        /// Keep the uploaded VCF and the results in the storage directories
        #[arg(long)]
        keep_files: bool,
    },

    /// Show or update the saved configuration
    Config {
        /// Path to the haplogrep3 executable or haplogrep3.jar
        #[arg(long)]
        executable: Option<PathBuf>,
        /// Tree used when a command does not name one
        #[arg(long)]
        default_tree: Option<String>,
        /// Java launcher for jar distributions
        #[arg(long)]
        java: Option<PathBuf>,
        /// Directory for kept uploads
        #[arg(long)]
        upload_dir: Option<PathBuf>,
        /// Directory for kept results
        #[arg(long)]
        results_dir: Option<PathBuf>,
    },
}
