mod comparator;
mod engine;
mod loader;
mod paragraph;
mod render;
mod scanner;

pub use comparator::{equal, first_mismatch, Mismatch};
pub use loader::{Line, SourceFile};
pub use paragraph::{Paragraph, Paragraphs};
pub use render::{Placement, ReportRenderer};
pub use scanner::{locate_first_difference, Divergence};

// Export the main engine
pub use engine::Engine;
