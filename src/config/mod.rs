pub mod config;

pub use config::{Config, CONTAINER_JAR};
