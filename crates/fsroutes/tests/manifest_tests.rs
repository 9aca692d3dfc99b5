/// Integration tests for the manifest builder
///
/// Each case is one file of a realistic App Router tree and the manifest
/// entry it must produce. The whole tree is built once, so parent resolution
/// across directories is exercised together.

use fsroutes::{build_manifest, RouteError, RouteManifest, RouteManifestEntry};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const APP_DIR: &str = "test/root/app";

const TREE: &[&str] = &[
    "test/root/app/routes/dummy.tsx",
    "test/root/app/routes/page.tsx",
    "test/root/app/routes/blog/page.tsx",
    "test/root/app/routes/blog/[slug]/page.tsx",
    "test/root/app/routes/(group)/about/page.tsx",
    "test/root/app/routes/shop/[[...slug]]/page.tsx",
    "test/root/app/routes/menu/layout.tsx",
    "test/root/app/routes/menu/page.tsx",
    "test/root/app/routes/menu/sub/page.tsx",
    "test/root/app/routes/(layout)/layout.tsx",
    "test/root/app/routes/(layout)/layout-1/page.tsx",
    "test/root/app/routes/(layout)/layout-2/page.tsx",
    "test/root/app/routes/(double-route)/(1)/double-route/page1/page.tsx",
    "test/root/app/routes/(double-route)/(2)/double-route/page2/page.tsx",
    "test/root/app/routes/layout1/layout.tsx",
    "test/root/app/routes/layout1/page.tsx",
    "test/root/app/routes/layout1/layout2/layout.tsx",
    "test/root/app/routes/layout1/layout2/page.tsx",
    "test/root/app/routes/layout1/layout2/layout3/layout.tsx",
    "test/root/app/routes/layout1/layout2/layout3/page.tsx",
];

#[fixture]
#[once]
fn manifest() -> RouteManifest {
    build_manifest(APP_DIR, TREE, "routes").unwrap()
}

fn page(id: &str, file: &str, path: Option<&str>, index: bool, parent: &str) -> RouteManifestEntry {
    RouteManifestEntry {
        path: path.map(str::to_string),
        index: index.then_some(true),
        case_sensitive: None,
        id: id.to_string(),
        parent_id: Some(parent.to_string()),
        file: file.to_string(),
    }
}

fn layout(id: &str, file: &str, parent: &str) -> RouteManifestEntry {
    RouteManifestEntry {
        path: None,
        index: None,
        case_sensitive: None,
        id: id.to_string(),
        parent_id: Some(parent.to_string()),
        file: file.to_string(),
    }
}

#[rstest]
#[case::root_page(page("$/routes/page", "routes/page.tsx", None, true, "root"))]
#[case::static_page(page("$/routes/blog/page", "routes/blog/page.tsx", Some("blog"), true, "root"))]
#[case::dynamic_page(page(
    "$/routes/blog/[slug]/page",
    "routes/blog/[slug]/page.tsx",
    Some("blog/:slug"),
    true,
    "root"
))]
#[case::group_page(page(
    "$/routes/(group)/about/page",
    "routes/(group)/about/page.tsx",
    Some("about"),
    true,
    "root"
))]
#[case::optional_catch_all_page(page(
    "$/routes/shop/[[...slug]]/page",
    "routes/shop/[[...slug]]/page.tsx",
    Some("shop/*"),
    false,
    "root"
))]
#[case::layout(layout("$/routes/menu/layout", "routes/menu/layout.tsx", "root"))]
#[case::page_under_sibling_layout(page(
    "$/routes/menu/page",
    "routes/menu/page.tsx",
    Some("menu"),
    true,
    "$/routes/menu/layout"
))]
#[case::page_under_ancestor_layout(page(
    "$/routes/menu/sub/page",
    "routes/menu/sub/page.tsx",
    Some("menu/sub"),
    true,
    "$/routes/menu/layout"
))]
#[case::group_layout(layout("$/routes/(layout)/layout", "routes/(layout)/layout.tsx", "root"))]
#[case::page_under_group_layout_1(page(
    "$/routes/(layout)/layout-1/page",
    "routes/(layout)/layout-1/page.tsx",
    Some("layout-1"),
    true,
    "$/routes/(layout)/layout"
))]
#[case::page_under_group_layout_2(page(
    "$/routes/(layout)/layout-2/page",
    "routes/(layout)/layout-2/page.tsx",
    Some("layout-2"),
    true,
    "$/routes/(layout)/layout"
))]
#[case::double_group_1(page(
    "$/routes/(double-route)/(1)/double-route/page1/page",
    "routes/(double-route)/(1)/double-route/page1/page.tsx",
    Some("double-route/page1"),
    true,
    "root"
))]
#[case::double_group_2(page(
    "$/routes/(double-route)/(2)/double-route/page2/page",
    "routes/(double-route)/(2)/double-route/page2/page.tsx",
    Some("double-route/page2"),
    true,
    "root"
))]
#[case::nested_layout_1(layout("$/routes/layout1/layout", "routes/layout1/layout.tsx", "root"))]
#[case::nested_page_1(page(
    "$/routes/layout1/page",
    "routes/layout1/page.tsx",
    Some("layout1"),
    true,
    "$/routes/layout1/layout"
))]
#[case::nested_layout_2(layout(
    "$/routes/layout1/layout2/layout",
    "routes/layout1/layout2/layout.tsx",
    "$/routes/layout1/layout"
))]
#[case::nested_page_2(page(
    "$/routes/layout1/layout2/page",
    "routes/layout1/layout2/page.tsx",
    Some("layout1/layout2"),
    true,
    "$/routes/layout1/layout2/layout"
))]
#[case::nested_layout_3(layout(
    "$/routes/layout1/layout2/layout3/layout",
    "routes/layout1/layout2/layout3/layout.tsx",
    "$/routes/layout1/layout2/layout"
))]
#[case::nested_page_3(page(
    "$/routes/layout1/layout2/layout3/page",
    "routes/layout1/layout2/layout3/page.tsx",
    Some("layout1/layout2/layout3"),
    true,
    "$/routes/layout1/layout2/layout3/layout"
))]
fn test_entry(manifest: &RouteManifest, #[case] expected: RouteManifestEntry) {
    assert_eq!(manifest.get(&expected.id), Some(&expected));
}

#[rstest]
fn test_non_route_files_produce_no_entry(manifest: &RouteManifest) {
    assert!(manifest.get("$/routes/dummy").is_none());
    assert!(manifest.keys().all(|id| !id.contains("dummy")));
}

#[rstest]
fn test_entry_count_and_id_shape(manifest: &RouteManifest) {
    // 19 page/layout files in the tree, `dummy.tsx` is not a route
    assert_eq!(manifest.len(), TREE.len() - 1);

    for (key, entry) in manifest {
        assert_eq!(key, &entry.id);
        assert!(
            entry.id.ends_with("/page") || entry.id.ends_with("/layout"),
            "unexpected id {}",
            entry.id
        );
        assert_ne!(entry.path.as_deref(), Some(""));
    }
}

#[rstest]
fn test_parents_are_inserted_before_children(manifest: &RouteManifest) {
    for (position, entry) in manifest.values().enumerate() {
        match entry.parent_id.as_deref() {
            Some("root") => {}
            Some(parent) => {
                let parent_position = manifest.get_index_of(parent).unwrap();
                assert!(parent_position < position, "{} listed before {}", entry.id, parent);
            }
            None => panic!("{} has no parent", entry.id),
        }
    }
}

#[test]
fn test_rebuild_is_identical_regardless_of_input_order() {
    let first = build_manifest(APP_DIR, TREE, "routes").unwrap();

    let mut reversed: Vec<&str> = TREE.to_vec();
    reversed.reverse();
    let second = build_manifest(APP_DIR, &reversed, "routes").unwrap();

    // IndexMap equality ignores order
    assert_eq!(first, second);
}

#[test]
fn test_windows_separators() {
    let manifest = build_manifest(
        r"C:\project\app",
        &[r"C:\project\app\routes\blog\[slug]\page.tsx"],
        "routes",
    )
    .unwrap();

    let entry = &manifest["$/routes/blog/[slug]/page"];
    assert_eq!(entry.file, "routes/blog/[slug]/page.tsx");
    assert_eq!(entry.path.as_deref(), Some("blog/:slug"));
}

#[test]
fn test_mixed_extensions() {
    let manifest = build_manifest(
        "/app",
        &["/app/routes/docs/layout.mdx", "/app/routes/docs/page.md"],
        "routes",
    )
    .unwrap();

    assert_eq!(manifest["$/routes/docs/layout"].file, "routes/docs/layout.mdx");
    assert_eq!(manifest["$/routes/docs/page"].file, "routes/docs/page.md");
}

#[test]
fn test_group_only_stem_page_is_index_without_path() {
    let manifest = build_manifest("/app", &["/app/routes/(marketing)/page.tsx"], "routes").unwrap();
    let entry = &manifest["$/routes/(marketing)/page"];
    assert_eq!(entry.path, None);
    assert_eq!(entry.index, Some(true));
}

#[test]
fn test_dynamic_segments_before_catch_all() {
    let manifest = build_manifest(
        "/app",
        &["/app/routes/[team]/docs/[[...rest]]/page.tsx"],
        "routes",
    )
    .unwrap();
    let entry = &manifest["$/routes/[team]/docs/[[...rest]]/page"];
    assert_eq!(entry.path.as_deref(), Some(":team/docs/*"));
    assert_eq!(entry.index, None);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_duplicate_page_conflict() {
    let err = build_manifest(
        "/app",
        &["/app/routes/blog/page.tsx", "/app/routes/blog/page.jsx"],
        "routes",
    )
    .unwrap_err();

    match err {
        RouteError::Conflict { files } => {
            assert_eq!(files, vec!["/app/routes/blog/page.tsx", "/app/routes/blog/page.jsx"]);
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn test_same_file_listed_twice_conflicts() {
    let err = build_manifest(
        "/app",
        &["/app/routes/page.tsx", "/app/routes/page.tsx"],
        "routes",
    )
    .unwrap_err();
    assert!(matches!(err, RouteError::Conflict { .. }));
}

#[test]
fn test_duplicate_layout_conflict_message() {
    let err = build_manifest(
        "/app",
        &["/app/routes/layout.ts", "/app/routes/layout.js"],
        "routes",
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Route conflict detected: /app/routes/layout.ts, /app/routes/layout.js both define the same route. Ensure only one file exists per route path."
    );
}

#[rstest]
#[case::required_catch_all("/app/routes/docs/[...slug]/page.tsx")]
#[case::required_catch_all_nested("/app/routes/[...all]/deep/page.tsx")]
fn test_required_catch_all_fails(#[case] file: &str) {
    let err = build_manifest("/app", &[file], "routes").unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedCatchAll { .. }), "{err:?}");
}

#[rstest]
#[case::optional_param("/app/routes/docs/[[slug]]/page.tsx")]
#[case::optional_empty("/app/routes/[[]]/page.tsx")]
fn test_optional_non_catch_all_fails(#[case] file: &str) {
    let err = build_manifest("/app", &[file], "routes").unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedOptionalSegment { .. }), "{err:?}");
}

#[test]
fn test_layout_only_stem_does_not_check_segments() {
    // Segments are only translated for pages
    let manifest = build_manifest("/app", &["/app/routes/[...slug]/layout.tsx"], "routes").unwrap();
    assert!(manifest.contains_key("$/routes/[...slug]/layout"));
}
