/// Route manifest: flat, id-keyed description of every page and layout
///
/// The builder runs one pass over the route stems, shallowest first, and
/// resolves each stem's parent from the layouts already in the manifest.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::path::{clean_relative, join_posix, normalize_slashes, relative_posix, AncestorLayouts};
use crate::route::{has_catch_all_segment, to_pathname};
use crate::{LAYOUT_NAME, PAGE_NAME, ROOT_ID, ROUTE_PREFIX};

pub mod stem;
pub use stem::{group_stems, RouteStem};

/// One resolved `page` or `layout` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifestEntry {
    /// URL pattern like `blog/:slug`; absent for layouts and root-level pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    /// Never set by the builder; kept so hand-written manifests round-trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// `<stem id>/page` or `<stem id>/layout`
    pub id: String,
    /// Nearest ancestor layout id, or `"root"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Source file relative to the app directory
    pub file: String,
}

impl RouteManifestEntry {
    fn layout(id: String, file: String, parent_id: String) -> Self {
        Self {
            path: None,
            index: None,
            case_sensitive: None,
            id,
            parent_id: Some(parent_id),
            file,
        }
    }

    fn page(id: String, file: String, path: Option<String>, parent_id: String) -> Self {
        // A page is an index route unless its path ends in a catch-all
        let index = match &path {
            Some(pathname) if has_catch_all_segment(pathname) => None,
            _ => Some(true),
        };
        Self {
            path,
            index,
            case_sensitive: None,
            id,
            parent_id: Some(parent_id),
            file,
        }
    }
}

/// Entries keyed by id, in insertion order
///
/// Equality is order-independent; iteration follows insertion.
pub type RouteManifest = IndexMap<String, RouteManifestEntry>;

/// Returns the stem path relative to the routes prefix
///
/// `$/routes/blog/[slug]` under `$/routes` → `blog/[slug]`; the routes root
/// itself → `""`.
fn stem_suffix<'a>(stem: &'a RouteStem, routes_prefix: &str, routes_dir: &str) -> Result<&'a str> {
    if stem.id == routes_prefix {
        return Ok("");
    }

    stem.id
        .strip_prefix(routes_prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| RouteError::OutsideRoutesDirectory {
            file: stem.files.first().cloned().unwrap_or_default(),
            routes_dir: routes_dir.to_string(),
        })
}

/// Builds the route manifest from a pre-collected list of route files
///
/// # Arguments
///
/// * `app_dir` - Application directory; ids and `file` values are relative to it
/// * `files` - Candidate route files (already filtered by discovery)
/// * `routes_dir` - Routes directory name relative to `app_dir`, e.g. `"routes"`
///
/// # Algorithm
///
/// 1. Group files by directory into stems, shallowest first
/// 2. For each stem, probe `AncestorLayouts` against the manifest for its parent
/// 3. A `layout` file becomes an entry and the parent of the stem's `page`
/// 4. A `page` file becomes an entry with its translated pathname
///
/// # Examples
///
/// ```
/// use fsroutes::build_manifest;
///
/// let manifest = build_manifest(
///     "/app",
///     &["/app/routes/menu/layout.tsx", "/app/routes/menu/page.tsx"],
///     "routes",
/// )
/// .unwrap();
///
/// let page = &manifest["$/routes/menu/page"];
/// assert_eq!(page.path.as_deref(), Some("menu"));
/// assert_eq!(page.parent_id.as_deref(), Some("$/routes/menu/layout"));
/// ```
///
/// # Errors
///
/// - [`RouteError::Conflict`] when a directory holds two pages or two layouts
/// - [`RouteError::UnsupportedCatchAll`] / [`RouteError::UnsupportedOptionalSegment`]
///   for catch-all syntax other than `[[...name]]`
/// - [`RouteError::OutsideRoutesDirectory`] for files outside `routes_dir`
pub fn build_manifest<S: AsRef<str>>(
    app_dir: &str,
    files: &[S],
    routes_dir: &str,
) -> Result<RouteManifest> {
    let app_dir = normalize_slashes(app_dir);
    let routes_dir = clean_relative(routes_dir);
    let routes_prefix = join_posix(ROUTE_PREFIX, &routes_dir);

    let mut manifest = RouteManifest::new();

    for stem in group_stems(&app_dir, files) {
        let suffix = stem_suffix(&stem, &routes_prefix, &routes_dir)?;

        let mut parent_id = AncestorLayouts::new(&routes_prefix, suffix)
            .find(|id| manifest.contains_key(id))
            .unwrap_or_else(|| ROOT_ID.to_string());

        tracing::debug!(stem = %stem.id, parent = %parent_id, "resolving route stem");

        let layout = match stem.find_module(LAYOUT_NAME)? {
            Some(file) => {
                let id = format!("{}/{}", stem.id, LAYOUT_NAME);
                let entry = RouteManifestEntry::layout(id, relative_posix(&app_dir, file), parent_id.clone());
                // A layout parents the page of its own directory
                parent_id = entry.id.clone();
                Some(entry)
            }
            None => None,
        };

        let page = match stem.find_module(PAGE_NAME)? {
            Some(file) => {
                let id = format!("{}/{}", stem.id, PAGE_NAME);
                let pathname = to_pathname(suffix)?;
                Some(RouteManifestEntry::page(
                    id,
                    relative_posix(&app_dir, file),
                    pathname,
                    parent_id,
                ))
            }
            None => None,
        };

        for entry in layout.into_iter().chain(page) {
            tracing::debug!(id = %entry.id, file = %entry.file, path = ?entry.path, "route entry");
            manifest.insert(entry.id.clone(), entry);
        }
    }

    Ok(manifest)
}
