/// Manifest-to-tree reducer
///
/// Nests the flat manifest into the route configuration tree a router consumes.
/// Pure data restructuring: no errors, no side effects.

use serde::{Deserialize, Serialize};

use crate::manifest::RouteManifest;
use crate::ROOT_ID;

/// A node of the nested route configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfigEntry {
    pub id: String,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// Absent when the node has no children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteConfigEntry>>,
}

/// Nests a manifest under the default `"root"` sentinel
///
/// See [`to_route_config_with_root`].
pub fn to_route_config(manifest: &RouteManifest) -> Vec<RouteConfigEntry> {
    to_route_config_with_root(manifest, ROOT_ID)
}

/// Nests a manifest into a route configuration tree
///
/// Entries whose `parentId` equals `root_id` become top-level nodes; every
/// other entry is appended to its parent's children. Both lists follow the
/// manifest's iteration order. An entry whose parent is not in the manifest
/// (or that has no `parentId`) is dropped together with its subtree.
///
/// # Examples
///
/// ```
/// use fsroutes::{build_manifest, to_route_config};
///
/// let manifest = build_manifest(
///     "/app",
///     &["/app/routes/menu/layout.tsx", "/app/routes/menu/page.tsx"],
///     "routes",
/// )
/// .unwrap();
/// let tree = to_route_config(&manifest);
///
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].id, "$/routes/menu/layout");
/// assert_eq!(tree[0].children.as_ref().unwrap()[0].id, "$/routes/menu/page");
/// ```
pub fn to_route_config_with_root(manifest: &RouteManifest, root_id: &str) -> Vec<RouteConfigEntry> {
    // Arena pass: top-level indices and per-entry child indices, by manifest position
    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); manifest.len()];

    for (idx, entry) in manifest.values().enumerate() {
        match entry.parent_id.as_deref() {
            Some(parent) if parent == root_id => roots.push(idx),
            Some(parent) => match manifest.get_index_of(parent) {
                Some(parent_idx) => children[parent_idx].push(idx),
                None => tracing::warn!(
                    id = %entry.id,
                    parent = %parent,
                    "route parent not found in manifest, skipping"
                ),
            },
            None => tracing::warn!(id = %entry.id, "route has no parent id, skipping"),
        }
    }

    roots
        .into_iter()
        .filter_map(|idx| build_node(manifest, &children, idx))
        .collect()
}

/// Materializes the node at `idx` with its subtree
///
/// Only nodes reachable from a top-level entry are visited, so a parent
/// cycle in a hand-written manifest is never entered.
fn build_node(manifest: &RouteManifest, children: &[Vec<usize>], idx: usize) -> Option<RouteConfigEntry> {
    let (_, entry) = manifest.get_index(idx)?;

    let nested: Vec<RouteConfigEntry> = children[idx]
        .iter()
        .filter_map(|&child| build_node(manifest, children, child))
        .collect();

    Some(RouteConfigEntry {
        id: entry.id.clone(),
        file: entry.file.clone(),
        path: entry.path.clone(),
        index: entry.index,
        case_sensitive: entry.case_sensitive,
        children: if nested.is_empty() { None } else { Some(nested) },
    })
}
