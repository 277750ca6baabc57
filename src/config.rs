/// Default loader and layout limits, sized for ordinary prose files.
pub const DEFAULT_MAX_LINES: usize = 1024;
pub const DEFAULT_MAX_LINE_LEN: usize = 256;
pub const DEFAULT_FIELD_WIDTH: usize = 50;

/// Bounds enforced by the line loader.
///
/// Both limits fail the run loudly when exceeded; nothing is silently
/// truncated, since a truncated line would corrupt paragraph boundaries
/// and equality results.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Maximum number of lines accepted per input file
    pub max_lines: usize,

    /// Maximum length of a single line, in bytes, terminator included
    pub max_line_len: usize,
}

/// Layout of the comparison report.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width of the left report field, in columns
    pub field_width: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Line loader bounds
    pub loader: LoaderConfig,

    /// Report layout settings
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loader: LoaderConfig {
                max_lines: DEFAULT_MAX_LINES,
                max_line_len: DEFAULT_MAX_LINE_LEN,
            },
            render: RenderConfig {
                field_width: DEFAULT_FIELD_WIDTH,
            },
        }
    }
}
