use super::paragraph::Paragraph;

/// Why two paragraphs failed to compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The paragraphs have different line counts; content was not inspected
    Length,
    /// Offset of the first line that differs between same-sized paragraphs
    Line(usize),
}

/// Locate the first point at which `p` and `q` disagree, or `None` when
/// they are equal.
///
/// A size mismatch short-circuits before any content comparison. Two
/// empty paragraphs are equal: the per-line condition holds vacuously.
pub fn first_mismatch(p: &Paragraph<'_>, q: &Paragraph<'_>) -> Option<Mismatch> {
    if p.len() != q.len() {
        return Some(Mismatch::Length);
    }

    p.lines()
        .iter()
        .zip(q.lines())
        .position(|(a, b)| a != b)
        .map(Mismatch::Line)
}

/// Paragraph equality with sentinel handling: an exhausted cursor on
/// either side is automatically unequal, never an error.
pub fn equal(p: Option<&Paragraph<'_>>, q: Option<&Paragraph<'_>>) -> bool {
    match (p, q) {
        (Some(p), Some(q)) => first_mismatch(p, q).is_none(),
        _ => false,
    }
}
