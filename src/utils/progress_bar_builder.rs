use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub(crate) struct ProgressBarBuilder {
    style_template: &'static str,
    message: String,
    length: Option<u64>,
    tick: Option<Duration>,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            style_template: "{spinner:.green} {msg}",
            message: message.into(),
            length: None,
            tick: None,
        }
    }

    /// Counted bar over `len` files instead of a spinner.
    pub(crate) fn with_length(mut self, len: u64) -> Self {
        self.style_template =
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
        self.length = Some(len);
        self
    }

    /// Keep the spinner moving while a single long-running process works.
    pub(crate) fn with_tick(mut self) -> Self {
        self.tick = Some(Duration::from_millis(120));
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = match self.length {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };

        let style = match self.length {
            Some(_) => ProgressStyle::default_bar()
                .template(self.style_template)?
                .progress_chars("#>-"),
            None => ProgressStyle::default_spinner().template(self.style_template)?,
        };
        pb.set_style(style);
        pb.set_message(self.message);

        if let Some(interval) = self.tick {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}
