use super::loader::Line;

/// A contiguous window over one file's line sequence representing a
/// single paragraph: a maximal run of non-blank lines bounded by blank
/// lines or the ends of the file.
///
/// The window borrows the shared line sequence and stores the half-open
/// range `start..end`, where `end` is the index of the terminating blank
/// line (or the sequence length when the final paragraph runs to end of
/// file). Creating a paragraph never copies a line. The window is empty
/// when two separators are adjacent (`start == end`).
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    lines: &'a [Line],
    start: usize,
    end: usize,
}

impl<'a> Paragraph<'a> {
    /// The first paragraph of `lines`, or `None` for an empty sequence.
    pub fn first(lines: &'a [Line]) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self::scan_from(lines, 0))
        }
    }

    /// The paragraph following this one, or `None` once the previous
    /// scan already stopped at the end of the sequence.
    ///
    /// Scanning resumes just past the blank line that terminated this
    /// paragraph and stops at the next blank line or end of sequence;
    /// an unterminated final line needs no special case. Successive
    /// calls yield disjoint spans with strictly increasing starts.
    pub fn next(&self) -> Option<Self> {
        if self.end == self.lines.len() {
            return None;
        }
        Some(Self::scan_from(self.lines, self.end + 1))
    }

    fn scan_from(lines: &'a [Line], start: usize) -> Self {
        let mut end = start;
        while end < lines.len() && !lines[end].is_blank() {
            end += 1;
        }
        Self { lines, start, end }
    }

    /// Index of the paragraph's first line in the file
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of content lines
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The paragraph's content lines, in file order
    pub fn lines(&self) -> &'a [Line] {
        &self.lines[self.start..self.end]
    }
}

/// Lazy cursor over a file's paragraphs, in order.
pub struct Paragraphs<'a> {
    next: Option<Paragraph<'a>>,
}

impl<'a> Paragraphs<'a> {
    pub fn new(lines: &'a [Line]) -> Self {
        Self {
            next: Paragraph::first(lines),
        }
    }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}
