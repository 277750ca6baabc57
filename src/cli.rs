use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{
    Config, LoaderConfig, RenderConfig, DEFAULT_FIELD_WIDTH, DEFAULT_MAX_LINES,
    DEFAULT_MAX_LINE_LEN,
};
use crate::core::Engine;

#[derive(Parser)]
#[command(name = "paradiff")]
#[command(about = "Compares two text files paragraph by paragraph")]
#[command(version)]
pub struct Cli {
    /// Left file to compare
    pub left: PathBuf,

    /// Right file to compare
    pub right: PathBuf,

    /// Width of the left report field, in columns
    #[arg(long, default_value_t = DEFAULT_FIELD_WIDTH)]
    pub width: usize,

    /// Maximum number of lines accepted per input file
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    pub max_lines: usize,

    /// Maximum length of a single line, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_length: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            loader: LoaderConfig {
                max_lines: self.max_lines,
                max_line_len: self.max_line_length,
            },
            render: RenderConfig {
                field_width: self.width,
            },
        }
    }

    pub fn execute(self, engine: Engine) -> Result<()> {
        engine.compare(&self.left, &self.right, io::stdout().lock())
    }
}
