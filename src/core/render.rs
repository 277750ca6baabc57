use std::io::{self, Write};

use crate::config::RenderConfig;
use super::loader::Line;
use super::paragraph::Paragraph;

/// Which side of the comparison a reported line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Present only in the left file; marked with a trailing `<`
    Left,
    /// Present only in the right file; marked with a leading `>` gutter
    Right,
    /// Identical content on both sides; rendered in both columns
    Both,
}

/// Writes report rows as padded columns.
///
/// Every row is built in a fresh string and ends with a line terminator
/// even when the source line lacked one.
pub struct ReportRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> ReportRenderer<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            width: config.field_width,
        }
    }

    /// Render one line under its placement tag.
    pub fn emit(&mut self, line: &Line, placement: Placement) -> io::Result<()> {
        let row = match placement {
            Placement::Left => {
                format!("{:<pad$}<", line.content(), pad = self.width.saturating_sub(1))
            }
            Placement::Right => {
                format!("{:>width$} {}", ">", line.content(), width = self.width)
            }
            Placement::Both => {
                format!(
                    "{:<width$} {}",
                    line.content(),
                    line.content(),
                    width = self.width
                )
            }
        };
        writeln!(self.out, "{row}")
    }

    /// Render every line of a paragraph in order; the sentinel renders
    /// nothing.
    pub fn emit_paragraph(
        &mut self,
        paragraph: Option<&Paragraph<'_>>,
        placement: Placement,
    ) -> io::Result<()> {
        let Some(paragraph) = paragraph else {
            return Ok(());
        };
        for line in paragraph.lines() {
            self.emit(line, placement)?;
        }
        Ok(())
    }

    /// Render the first-divergent line pair on one tab-separated row.
    pub fn emit_divergent_pair(&mut self, left: &str, right: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}\t{}",
            left.trim_end_matches(['\n', '\r']),
            right.trim_end_matches(['\n', '\r'])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::Line;

    fn render_one(line: &str, placement: Placement) -> String {
        let mut out = Vec::new();
        let config = RenderConfig { field_width: 50 };
        let mut renderer = ReportRenderer::new(&mut out, &config);
        renderer.emit(&Line::new(line.to_string()), placement).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_both_row_shows_line_in_two_columns() {
        let row = render_one("same\n", Placement::Both);

        assert_eq!(row, format!("{:<50} same\n", "same"));
    }

    #[test]
    fn test_right_row_has_marker_gutter() {
        let row = render_one("only-right\n", Placement::Right);

        assert_eq!(row, format!("{:>50} only-right\n", ">"));
    }

    #[test]
    fn test_left_row_has_trailing_marker() {
        let row = render_one("only-left\n", Placement::Left);

        assert_eq!(row, format!("{:<49}<\n", "only-left"));
        // The marker sits in the last column of the field.
        assert_eq!(row.find('<'), Some(49));
    }

    #[test]
    fn test_row_is_terminated_even_without_source_terminator() {
        let row = render_one("tail", Placement::Both);

        assert!(row.ends_with('\n'));
    }

    #[test]
    fn test_sentinel_paragraph_renders_nothing() {
        let mut out = Vec::new();
        let config = RenderConfig { field_width: 50 };
        let mut renderer = ReportRenderer::new(&mut out, &config);
        renderer.emit_paragraph(None, Placement::Both).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_divergent_pair_is_tab_separated() {
        let mut out = Vec::new();
        let config = RenderConfig { field_width: 50 };
        let mut renderer = ReportRenderer::new(&mut out, &config);
        renderer.emit_divergent_pair("b\n", "x\n").unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "b\tx\n");
    }
}
