/// Translation of stem paths into URL pathname patterns
///
/// Pure functional parser: a stem path relative to the routes directory goes
/// in, a pathname pattern (or nothing, for the routes root) comes out.

use crate::error::Result;

use super::pattern::{classify_segment, WILDCARD};

/// Accumulator for the fold over segments
///
/// All mutation is local to the fold; each step consumes and returns the state.
#[derive(Default)]
struct ParseState {
    segments: Vec<String>,
}

impl ParseState {
    /// Appends one pathname component
    fn with_segment(mut self, segment: String) -> Self {
        self.segments.push(segment);
        self
    }

    /// Joins the components, mapping the empty pattern to `None`
    fn finalize(self) -> Option<String> {
        let pathname = self.segments.join("/");
        if pathname.is_empty() {
            None
        } else {
            Some(pathname)
        }
    }
}

/// Processes a single segment and updates the parse state
///
/// Pure function: (state, segment) -> new state, or the grammar error
fn process_segment(state: ParseState, segment: &str) -> Result<ParseState> {
    Ok(match classify_segment(segment)?.pathname() {
        Some(pathname) => state.with_segment(pathname),
        None => state,
    })
}

/// Translates a stem path into a URL pathname pattern
///
/// `stem` is the directory of a page relative to the routes directory, with
/// `/` separators. Groups are dropped, `[name]` becomes `:name`,
/// `[[...name]]` becomes `*`, everything else passes through. Returns `None`
/// when nothing is left (the routes root, or a stem made only of groups).
///
/// # Examples
///
/// ```
/// use fsroutes::route::parser::to_pathname;
///
/// assert_eq!(to_pathname("blog/[slug]").unwrap().as_deref(), Some("blog/:slug"));
/// assert_eq!(to_pathname("shop/[[...slug]]").unwrap().as_deref(), Some("shop/*"));
/// assert_eq!(to_pathname("(group)/about").unwrap().as_deref(), Some("about"));
/// assert_eq!(to_pathname("").unwrap(), None);
/// assert!(to_pathname("docs/[...slug]").is_err());
/// ```
///
/// # Errors
///
/// The first unsupported segment aborts the translation; see
/// [`classify_segment`](super::pattern::classify_segment).
pub fn to_pathname(stem: &str) -> Result<Option<String>> {
    stem.split('/')
        .try_fold(ParseState::default(), process_segment)
        .map(ParseState::finalize)
}

/// Checks whether a translated pathname contains the catch-all wildcard
///
/// ```
/// use fsroutes::route::parser::has_catch_all_segment;
///
/// assert!(has_catch_all_segment("shop/*"));
/// assert!(!has_catch_all_segment("shop/:slug"));
/// ```
pub fn has_catch_all_segment(pathname: &str) -> bool {
    pathname.split('/').any(|segment| segment == WILDCARD)
}
