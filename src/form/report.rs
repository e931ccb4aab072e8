use crate::form::{FormOutcome, FormSettings, TROUBLESHOOTING_HINTS};
use crate::haplogrep::tree_label;
use serde::Serialize;
use std::fmt;

/// Number of leading columns shown as headline values for each sample.
pub const HEADLINE_COLUMNS: usize = 3;

/// Tab-separated Haplogrep3 output split into a header and sample rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// First line is the header; every following non-blank line is a row.
    /// Content with no line after the header yields an empty table.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.trim().lines();
        let header = match lines.next() {
            Some(header) => header,
            None => return Self::default(),
        };
        let rows: Vec<Vec<String>> = lines
            .filter(|line| !line.trim().is_empty())
            .map(split_tabs)
            .collect();
        if rows.is_empty() {
            return Self::default();
        }
        Self {
            headers: split_tabs(header),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (header, value) pairs of one row; a short row simply yields fewer pairs.
    pub fn record(&self, index: usize) -> Vec<(&str, &str)> {
        self.rows
            .get(index)
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(h, v)| (h.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn split_tabs(line: &str) -> Vec<String> {
    line.split('\t').map(|field| field.trim_matches('"').to_string()).collect()
}

/// Plain-text rendering of a form submission.
pub struct Report<'a> {
    pub outcome: &'a FormOutcome,
    pub settings: &'a FormSettings,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            FormOutcome::Classified {
                result,
                content,
                table,
                kept,
                finished_at,
            } => {
                writeln!(
                    f,
                    "Classification completed successfully ({})",
                    finished_at.format("%Y-%m-%d %H:%M:%S")
                )?;
                if let Some(kept) = kept {
                    writeln!(f, "Files saved permanently:")?;
                    writeln!(f, "  VCF: {}", kept.input.display())?;
                    writeln!(f, "  Results: {}", kept.output.display())?;
                }

                writeln!(f, "\n== Classified haplogroups ==")?;
                if table.is_empty() {
                    writeln!(f, "No classification results found in the file.")?;
                }
                for index in 0..table.rows.len() {
                    writeln!(f, "-- Result {} --", index + 1)?;
                    for (column, (header, value)) in table.record(index).into_iter().enumerate() {
                        if column < HEADLINE_COLUMNS {
                            writeln!(f, "  {}: {}", header, value)?;
                        } else {
                            writeln!(f, "    {}: {}", header, value)?;
                        }
                    }
                }

                writeln!(f, "\n== Full output ==")?;
                writeln!(f, "{}", content.trim_end())?;

                writeln!(f, "\n== Technical information ==")?;
                let tree = match tree_label(&self.settings.tree) {
                    Some(label) => format!("{} ({})", self.settings.tree, label),
                    None => self.settings.tree.clone(),
                };
                writeln!(f, "Tree: {}", tree)?;
                writeln!(f, "Metric: {}", self.settings.metric.label())?;
                writeln!(f, "Extended report: {}", self.settings.extend_report)?;
                writeln!(f, "Hits: {}", self.settings.hits)?;
                writeln!(f, "Heteroplasmy level: {}", self.settings.het_level)?;
                writeln!(f, "Exit code: {}", result.exit_code())?;
                writeln!(f, "Files kept: {}", self.settings.keep_files)?;

                if !result.stdout().is_empty() {
                    writeln!(f, "\n== Haplogrep3 stdout ==")?;
                    writeln!(f, "{}", result.stdout().trim_end())?;
                }
            }
            FormOutcome::Failed { result } => {
                writeln!(f, "Classification failed!")?;
                writeln!(f, "Error message: {}", result.error_message().trim_end())?;
                if !result.stdout().is_empty() {
                    writeln!(f, "\n== Details ==")?;
                    writeln!(f, "{}", result.stdout().trim_end())?;
                }
                writeln!(f, "\nTroubleshooting:")?;
                for hint in TROUBLESHOOTING_HINTS {
                    writeln!(f, "- {}", hint)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "\"SampleID\"\t\"Haplogroup\"\t\"Rank\"\t\"Quality\"\n\
                          \"1001\"\t\"L3e2b1a\"\t\"1\"\t\"0.93\"\n\
                          \n\
                          \"1002\"\t\"H1\"\t\"1\"\t\"0.88\"\n";

    #[test]
    fn header_and_rows_are_split_on_tabs() {
        let table = ResultTable::parse(OUTPUT);
        assert_eq!(table.headers, vec!["SampleID", "Haplogroup", "Rank", "Quality"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.record(1),
            vec![("SampleID", "1002"), ("Haplogroup", "H1"), ("Rank", "1"), ("Quality", "0.88")]
        );
    }

    #[test]
    fn header_only_output_is_empty() {
        assert!(ResultTable::parse("SampleID\tHaplogroup\n").is_empty());
        assert!(ResultTable::parse("").is_empty());
    }

    #[test]
    fn short_rows_are_tolerated() {
        let table = ResultTable::parse("a\tb\tc\nx\n");
        assert_eq!(table.record(0), vec![("a", "x")]);
        assert!(table.record(5).is_empty());
    }
}
