/// Lazy iterator over the layout ids that could parent a route stem
///
/// For the stem `menu/sub` under the routes prefix `$/routes`, yields:
/// `$/routes/menu/layout` → `$/routes/layout`
///
/// The walk goes from the immediate parent directory up to the routes root
/// and stops there. Callers probe each candidate against the manifest and
/// take the first hit, so iteration short-circuits as soon as a layout is found.
///
/// # Examples
///
/// ```
/// use fsroutes::path::AncestorLayouts;
///
/// let ids: Vec<String> = AncestorLayouts::new("$/routes", "blog/[slug]").collect();
/// assert_eq!(ids, vec!["$/routes/blog/layout", "$/routes/layout"]);
///
/// // The routes root itself only probes its own layout slot
/// let ids: Vec<String> = AncestorLayouts::new("$/routes", "").collect();
/// assert_eq!(ids, vec!["$/routes/layout"]);
/// ```
#[derive(Debug, Clone)]
pub struct AncestorLayouts<'a> {
    prefix: &'a str,
    current: Option<&'a str>,
}

impl<'a> AncestorLayouts<'a> {
    /// Creates the iterator for a stem, given the routes prefix and the
    /// stem's path relative to that prefix
    pub fn new(prefix: &'a str, stem: &'a str) -> Self {
        Self {
            prefix,
            current: Some(stem),
        }
    }
}

impl<'a> Iterator for AncestorLayouts<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        // Drop the last segment; once there is none left we are at the routes root
        let (parent, next) = match current.rfind('/') {
            Some(slash_pos) => (&current[..slash_pos], Some(&current[..slash_pos])),
            None => ("", None),
        };
        self.current = next;

        Some(if parent.is_empty() {
            format!("{}/{}", self.prefix, crate::LAYOUT_NAME)
        } else {
            format!("{}/{}/{}", self.prefix, parent, crate::LAYOUT_NAME)
        })
    }
}
