use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::LoaderConfig;
use crate::error::{ParadiffError, Result};

/// One record of a file, terminator included.
///
/// Equality is byte-exact over the raw text, terminator and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
}

impl Line {
    pub fn new(raw: String) -> Self {
        Self { raw }
    }

    /// The line exactly as read, including any trailing terminator
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The line with its terminator stripped (`\n`, or `\r\n`)
    pub fn content(&self) -> &str {
        let text = self.raw.strip_suffix('\n').unwrap_or(&self.raw);
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// A blank line separates paragraphs: its content is empty
    pub fn is_blank(&self) -> bool {
        self.content().is_empty()
    }
}

/// An input file loaded into an owned, immutable line sequence.
///
/// Paragraphs borrow the sequence; it outlives every paragraph derived
/// from it and is never copied into one.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<Line>,
}

impl SourceFile {
    /// Read `path` into memory, enforcing the configured bounds.
    ///
    /// A line longer than `max_line_len` or a file longer than
    /// `max_lines` fails the whole run rather than truncating.
    pub fn load<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ParadiffError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();

        loop {
            let mut raw = String::new();
            let bytes_read = reader.read_line(&mut raw)?;
            if bytes_read == 0 {
                break;
            }

            if raw.len() > config.max_line_len {
                return Err(ParadiffError::LineTooLong {
                    path: path.to_path_buf(),
                    line: lines.len(),
                    limit: config.max_line_len,
                });
            }
            if lines.len() == config.max_lines {
                return Err(ParadiffError::TooManyLines {
                    path: path.to_path_buf(),
                    limit: config.max_lines,
                });
            }

            lines.push(Line::new(raw));
        }

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn limits(max_lines: usize, max_line_len: usize) -> LoaderConfig {
        LoaderConfig {
            max_lines,
            max_line_len,
        }
    }

    #[test]
    fn test_load_preserves_terminators() {
        let file = write_fixture("hello\nworld\n");
        let source = SourceFile::load(file.path(), &limits(16, 64)).unwrap();

        assert_eq!(source.line_count(), 2);
        assert_eq!(source.lines()[0].as_str(), "hello\n");
        assert_eq!(source.lines()[1].as_str(), "world\n");
    }

    #[test]
    fn test_final_line_without_terminator() {
        let file = write_fixture("hello\nworld");
        let source = SourceFile::load(file.path(), &limits(16, 64)).unwrap();

        assert_eq!(source.lines()[1].as_str(), "world");
        assert_eq!(source.lines()[1].content(), "world");
    }

    #[test]
    fn test_blank_line_detection() {
        assert!(Line::new("\n".to_string()).is_blank());
        assert!(Line::new("\r\n".to_string()).is_blank());
        assert!(Line::new("".to_string()).is_blank());
        assert!(!Line::new(" \n".to_string()).is_blank());
        assert!(!Line::new("x\n".to_string()).is_blank());
    }

    #[test]
    fn test_line_too_long_is_fatal() {
        let file = write_fixture("short\nmuch-too-long-for-the-limit\n");
        let err = SourceFile::load(file.path(), &limits(16, 10)).unwrap_err();

        match err {
            ParadiffError::LineTooLong { line, limit, .. } => {
                assert_eq!(line, 1);
                assert_eq!(limit, 10);
            }
            other => panic!("expected LineTooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_lines_is_fatal() {
        let file = write_fixture("a\nb\nc\n");
        let err = SourceFile::load(file.path(), &limits(2, 64)).unwrap_err();

        assert!(matches!(err, ParadiffError::TooManyLines { limit: 2, .. }));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SourceFile::load("no/such/file", &limits(16, 64)).unwrap_err();
        assert!(err.to_string().contains("no/such/file"));
    }
}
