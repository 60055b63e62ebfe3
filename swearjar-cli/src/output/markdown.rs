//! Markdown output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs each file's blocks with flagged runs emphasized
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    file_count: usize,
    flagged_files: usize,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            file_count: 0,
            flagged_files: 0,
            match_count: 0,
        }
    }
}

/// Inline code span wide enough for any backtick run inside `text`
fn code_span(text: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    if longest > 0 {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.file_count += 1;
        self.match_count += report.match_count();
        if report.analysis.profanity {
            self.flagged_files += 1;
        }

        writeln!(self.writer, "## {}", report.file)?;
        writeln!(self.writer)?;

        match &report.blocks {
            Some(blocks) => {
                for block in blocks {
                    if block.profanity {
                        write!(self.writer, "**{}**", code_span(&block.text))?;
                    } else {
                        write!(self.writer, "{}", block.text)?;
                    }
                }
            }
            None => write!(self.writer, "{}", report.analysis.cleaned)?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Files: {}, flagged: {}, matches: {}*",
            self.file_count, self.flagged_files, self.match_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
