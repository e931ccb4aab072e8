//! Process wrapper around the Haplogrep3 command-line tool.
//!
//! [`Haplogrep3`] turns a [`ClassificationRequest`] into a `classify`
//! command line, runs it, and reports the outcome as a
//! [`ClassificationResult`]. Output files are produced by the tool and read
//! back as opaque text.

pub mod launcher;
pub mod metric;
pub mod request;
pub mod result;
pub mod trees;
mod wrapper;

pub use launcher::Launcher;
pub use metric::{ClassificationMetric, MetricChoice};
pub use request::{batch_output_path, ClassificationRequest, ClassifyOptions};
pub use result::{scan_stdout_for_error, ClassificationResult, LAUNCH_FAILURE_EXIT_CODE};
pub use trees::{parse_tree_listing, tree_label, DEFAULT_TREE, KNOWN_TREES};
pub use wrapper::{read_results, Haplogrep3};
