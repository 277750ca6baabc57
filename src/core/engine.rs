use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ParadiffError;
use super::comparator::{self, Mismatch};
use super::loader::SourceFile;
use super::paragraph::Paragraph;
use super::render::{Placement, ReportRenderer};
use super::scanner;

/// Orchestrates one comparison run: load both files, walk their
/// paragraphs, then run the character-level divergence scan.
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compare `left` against `right`, writing the report to `out`.
    ///
    /// Finding differences is a successful run; only I/O and limit
    /// violations produce an error.
    pub fn compare<W: Write>(&self, left: &Path, right: &Path, out: W) -> Result<()> {
        let left_file = SourceFile::load(left, &self.config.loader)?;
        let right_file = SourceFile::load(right, &self.config.loader)?;

        debug!(
            path = %left_file.path().display(),
            lines = left_file.line_count(),
            "loaded left file"
        );
        debug!(
            path = %right_file.path().display(),
            lines = right_file.line_count(),
            "loaded right file"
        );

        let mut renderer = ReportRenderer::new(out, &self.config.render);
        self.compare_paragraphs(&left_file, &right_file, &mut renderer)?;
        self.scan_divergence(left, right, &mut renderer)?;

        Ok(())
    }

    /// Walk both files' paragraphs in lockstep.
    ///
    /// Equal pairs render once as both-sides rows; an unequal pair
    /// renders the left paragraph under its `<` marker and the right
    /// paragraph under its `>` gutter. Once either file runs out of
    /// paragraphs, the remainder of the longer file is one-sided.
    fn compare_paragraphs<W: Write>(
        &self,
        left: &SourceFile,
        right: &SourceFile,
        renderer: &mut ReportRenderer<W>,
    ) -> Result<()> {
        let mut p = Paragraph::first(left.lines());
        let mut q = Paragraph::first(right.lines());

        while let (Some(lp), Some(rp)) = (p, q) {
            match comparator::first_mismatch(&lp, &rp) {
                None => renderer.emit_paragraph(Some(&lp), Placement::Both)?,
                Some(mismatch) => {
                    match mismatch {
                        Mismatch::Length => debug!(
                            left_start = lp.start(),
                            right_start = rp.start(),
                            "paragraphs differ in length"
                        ),
                        Mismatch::Line(offset) => debug!(
                            left_start = lp.start(),
                            right_start = rp.start(),
                            offset,
                            "paragraphs first differ at line offset"
                        ),
                    }
                    renderer.emit_paragraph(Some(&lp), Placement::Left)?;
                    renderer.emit_paragraph(Some(&rp), Placement::Right)?;
                }
            }
            p = lp.next();
            q = rp.next();
        }

        while let Some(lp) = p {
            renderer.emit_paragraph(Some(&lp), Placement::Left)?;
            p = lp.next();
        }
        while let Some(rp) = q {
            renderer.emit_paragraph(Some(&rp), Placement::Right)?;
            q = rp.next();
        }

        Ok(())
    }

    /// Character-level scan over fresh readers; independent of the
    /// paragraph walk and never reconciled with it.
    fn scan_divergence<W: Write>(
        &self,
        left: &Path,
        right: &Path,
        renderer: &mut ReportRenderer<W>,
    ) -> Result<()> {
        let left_reader = BufReader::new(open(left)?);
        let right_reader = BufReader::new(open(right)?);

        let divergence = scanner::locate_first_difference(left_reader, right_reader)?;
        if divergence.is_empty() {
            info!("no character-level divergence found");
            return Ok(());
        }

        debug!(lines = ?divergence.lines, "divergent line numbers");
        if let Some((left_line, right_line)) = &divergence.first_pair {
            renderer.emit_divergent_pair(left_line, right_line)?;
        }

        Ok(())
    }
}

fn open(path: &Path) -> crate::error::Result<File> {
    File::open(path).map_err(|source| ParadiffError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
