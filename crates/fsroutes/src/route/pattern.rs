/// Segment grammar for route directories
///
/// Pure functional classification of one directory name into the kind of URL
/// segment it produces. All functions are **pure**: same input → same output.

use crate::error::{Result, RouteError};

/// Route groups: `(marketing)`
pub const GROUP_START: &str = "(";
pub const GROUP_END: &str = ")";

/// Dynamic segments: `[slug]`
pub const PARAM_START: &str = "[";
pub const PARAM_END: &str = "]";

/// Optional segments: `[[...slug]]`
pub const OPTIONAL_START: &str = "[[";
pub const OPTIONAL_END: &str = "]]";

/// Marks a catch-all parameter inside brackets
pub const CATCH_ALL_PREFIX: &str = "...";

/// Pathname component emitted for an optional catch-all
pub const WILDCARD: &str = "*";

/// Kinds of route segments
///
/// Functional sum type; each dynamic variant carries the parameter name.
///
/// # Examples
///
/// ```
/// use fsroutes::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about").unwrap(), SegmentKind::Static("about".into()));
/// assert_eq!(classify_segment("(group)").unwrap(), SegmentKind::Group("group".into()));
/// assert_eq!(classify_segment("[slug]").unwrap(), SegmentKind::Dynamic("slug".into()));
/// assert_eq!(
///     classify_segment("[[...slug]]").unwrap(),
///     SegmentKind::OptionalCatchAll("slug".into())
/// );
///
/// assert!(classify_segment("[...slug]").is_err());
/// assert!(classify_segment("[[slug]]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Organizational `(name)` segment, contributes nothing to the URL
    Group(String),
    /// `[[...name]]`, matches zero or more trailing components
    OptionalCatchAll(String),
    /// `[name]`, binds one component to a named parameter
    Dynamic(String),
    /// Any other text, passed through unchanged
    Static(String),
}

impl SegmentKind {
    /// URL pathname text for this segment, `None` for groups
    ///
    /// ```
    /// use fsroutes::route::pattern::SegmentKind;
    ///
    /// assert_eq!(SegmentKind::Dynamic("id".into()).pathname().as_deref(), Some(":id"));
    /// assert_eq!(SegmentKind::OptionalCatchAll("rest".into()).pathname().as_deref(), Some("*"));
    /// assert_eq!(SegmentKind::Group("admin".into()).pathname(), None);
    /// ```
    pub fn pathname(&self) -> Option<String> {
        match self {
            SegmentKind::Group(_) => None,
            SegmentKind::OptionalCatchAll(_) => Some(WILDCARD.to_string()),
            SegmentKind::Dynamic(name) => Some(format!(":{}", name)),
            SegmentKind::Static(text) => Some(text.clone()),
        }
    }
}

/// Returns the text between `start` and `end` when `segment` is wrapped by both
fn unwrap_delimited<'a>(segment: &'a str, start: &str, end: &str) -> Option<&'a str> {
    segment.strip_prefix(start)?.strip_suffix(end)
}

/// Classifies a segment into its kind (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Group**: `(name)`
/// 2. **Optional catch-all**: `[[...name]]`; any other `[[x]]` is an error
/// 3. **Dynamic**: `[name]`; `[...name]` is an error (catch-alls must be optional)
/// 4. **Static**: any other text
///
/// # Errors
///
/// - [`RouteError::UnsupportedOptionalSegment`] for `[[name]]`
/// - [`RouteError::UnsupportedCatchAll`] for `[...name]`
pub fn classify_segment(segment: &str) -> Result<SegmentKind> {
    if let Some(name) = unwrap_delimited(segment, GROUP_START, GROUP_END) {
        return Ok(SegmentKind::Group(name.to_string()));
    }

    if let Some(inner) = unwrap_delimited(segment, OPTIONAL_START, OPTIONAL_END) {
        return match inner.strip_prefix(CATCH_ALL_PREFIX) {
            Some(name) => Ok(SegmentKind::OptionalCatchAll(name.to_string())),
            None => Err(RouteError::UnsupportedOptionalSegment {
                segment: segment.to_string(),
            }),
        };
    }

    match unwrap_delimited(segment, PARAM_START, PARAM_END) {
        Some(inner) if inner.starts_with(CATCH_ALL_PREFIX) => Err(RouteError::UnsupportedCatchAll {
            segment: segment.to_string(),
        }),
        Some(name) => Ok(SegmentKind::Dynamic(name.to_string())),
        None => Ok(SegmentKind::Static(segment.to_string())),
    }
}
