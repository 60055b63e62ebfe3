//! Plain text output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs the cleaned text of each file
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter; `headers` prefixes each file with its path
    pub fn new(writer: W, headers: bool) -> Self {
        Self { writer, headers }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(headers: bool) -> Self {
        Self::new(io::stdout(), headers)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {} <==", report.file)?;
        }

        let cleaned = &report.analysis.cleaned;
        write!(self.writer, "{cleaned}")?;
        if !cleaned.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{report, SharedBuffer};

    #[test]
    fn test_cleaned_text() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), false);

        formatter.format_file(&report("a.txt", "this is bad")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "this is ***\n");
    }

    #[test]
    fn test_headers_and_trailing_newline() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), true);

        formatter.format_file(&report("a.txt", "bad\n")).unwrap();
        formatter.format_file(&report("b.txt", "fine")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            buffer.contents(),
            "==> a.txt <==\n***\n==> b.txt <==\nfine\n"
        );
    }
}
