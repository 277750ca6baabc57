use std::io::{self, BufRead};

use tracing::debug;

/// Result of the character-level divergence scan.
///
/// This scan is a coarser diagnostic running beside the paragraph
/// comparison; the two are never reconciled and may locate different
/// "first difference" positions.
#[derive(Debug, Default)]
pub struct Divergence {
    /// 0-based numbers of lines containing a byte disagreement, in order
    pub lines: Vec<usize>,
    /// The divergent lines at the earliest recorded number, terminators
    /// included
    pub first_pair: Option<(String, String)>,
}

impl Divergence {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Walk both streams one line at a time in lockstep and record every
/// line containing a byte-level disagreement.
///
/// The scan stops as soon as either stream is exhausted. Lines are
/// compared byte-for-byte up to the shorter length, so one line being a
/// strict prefix of the other records nothing; a completed line is
/// counted only when both streams presented a terminator on the same
/// step.
pub fn locate_first_difference<A: BufRead, B: BufRead>(
    mut left: A,
    mut right: B,
) -> io::Result<Divergence> {
    let mut divergence = Divergence::default();
    let mut line_number = 0usize;

    loop {
        let mut left_line = String::new();
        let mut right_line = String::new();
        let left_read = left.read_line(&mut left_line)?;
        let right_read = right.read_line(&mut right_line)?;
        if left_read == 0 || right_read == 0 {
            break;
        }

        if let Some(offset) = first_divergent_byte(&left_line, &right_line) {
            debug!(line = line_number, offset, "streams disagree");
            divergence.lines.push(line_number);
            if divergence.first_pair.is_none() {
                divergence.first_pair = Some((left_line.clone(), right_line.clone()));
            }
        }

        if left_line.ends_with('\n') && right_line.ends_with('\n') {
            line_number += 1;
        }
    }

    Ok(divergence)
}

fn first_divergent_byte(a: &str, b: &str) -> Option<usize> {
    a.bytes().zip(b.bytes()).position(|(x, y)| x != y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(a: &str, b: &str) -> Divergence {
        locate_first_difference(a.as_bytes(), b.as_bytes()).unwrap()
    }

    #[test]
    fn test_identical_streams_record_nothing() {
        let d = scan("a\nb\nc\n", "a\nb\nc\n");

        assert!(d.is_empty());
        assert!(d.first_pair.is_none());
    }

    #[test]
    fn test_first_divergence_line_and_pair() {
        let d = scan("a\nb\nc\n", "a\nx\nc\n");

        assert_eq!(d.lines, vec![1]);
        assert_eq!(
            d.first_pair,
            Some(("b\n".to_string(), "x\n".to_string()))
        );
    }

    #[test]
    fn test_every_divergent_line_is_recorded() {
        let d = scan("a\nb\nc\n", "x\nb\ny\n");

        assert_eq!(d.lines, vec![0, 2]);
        // The pair belongs to the earliest recorded line.
        assert_eq!(
            d.first_pair,
            Some(("a\n".to_string(), "x\n".to_string()))
        );
    }

    #[test]
    fn test_scan_stops_at_shorter_stream() {
        // The third line of the longer file is never inspected.
        let d = scan("a\nb\n", "a\nb\nc\n");

        assert!(d.is_empty());
    }

    #[test]
    fn test_unterminated_prefix_is_not_a_divergence() {
        // Left ends mid-line; the common bytes agree.
        let d = scan("ab", "ab\n");

        assert!(d.is_empty());
    }

    #[test]
    fn test_terminator_against_content_diverges() {
        // Shorter line: its terminator disagrees with the longer line's
        // next content byte.
        let d = scan("ab\n", "abc\n");

        assert_eq!(d.lines, vec![0]);
    }

    #[test]
    fn test_divergence_within_longer_line() {
        let d = scan("abc\n", "abx\n");

        assert_eq!(d.lines, vec![0]);
    }
}
