/// Route module for file-system conventions
///
/// Pure functional components that turn directory names into URL segments.
/// - `pattern`: classification of one segment (group, dynamic, optional catch-all)
/// - `parser`: translation of a whole stem path into a pathname pattern

pub mod parser;
pub mod pattern;

// Re-export commonly used items
pub use parser::{has_catch_all_segment, to_pathname};
pub use pattern::{classify_segment, SegmentKind};
