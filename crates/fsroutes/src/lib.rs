//! # fsroutes
//!
//! Compiles a directory of `page` / `layout` files, named after the App Router
//! file-system conventions, into a flat route manifest and then into the
//! nested route configuration a router consumes:
//! - Nested routes (`routes/blog/page.tsx` → `blog`)
//! - Dynamic segments (`[slug]` → `:slug`)
//! - Optional catch-all segments (`[[...slug]]` → `*`)
//! - Route groups (`(marketing)/about` → `about`)
//! - Nested layouts (`layout.tsx` parents every page below it)
//! - Ignored files (`_private/`, dotfiles, user globs)
//!
//! ## Pipeline
//!
//! 1. **Discovery** ([`FileDiscovery`]) collects candidate files
//! 2. **Manifest** ([`build_manifest`]) groups them per directory, resolves
//!    parents and translates segments; pure, no filesystem access
//! 3. **Tree** ([`to_route_config`]) nests the manifest under its parents
//!
//! ## Example
//!
//! ```
//! use fsroutes::{build_manifest, to_route_config};
//!
//! let manifest = build_manifest(
//!     "/app",
//!     &[
//!         "/app/routes/page.tsx",
//!         "/app/routes/blog/layout.tsx",
//!         "/app/routes/blog/[slug]/page.tsx",
//!     ],
//!     "routes",
//! )
//! .unwrap();
//!
//! let post = &manifest["$/routes/blog/[slug]/page"];
//! assert_eq!(post.path.as_deref(), Some("blog/:slug"));
//! assert_eq!(post.parent_id.as_deref(), Some("$/routes/blog/layout"));
//!
//! let tree = to_route_config(&manifest);
//! assert_eq!(tree.len(), 2);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod path;
pub mod route;
pub mod tree;

pub use config::{Config, RoutesOptions, RoutingConfig};
pub use discovery::{find_root_route, FileDiscovery, StaticDiscovery, WalkDirDiscovery};
pub use error::{Result, RouteError};
pub use manifest::{build_manifest, RouteManifest, RouteManifestEntry};
pub use route::{classify_segment, SegmentKind};
pub use tree::{to_route_config, to_route_config_with_root, RouteConfigEntry};

// ============================================================================
// Conventions
// ============================================================================

/// Extensions a route module may have
pub const ROUTE_MODULE_EXTS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".md", ".mdx"];

/// Files and directories starting with this are never routes
pub const IGNORED_PREFIX: char = '_';

pub const PAGE_NAME: &str = "page";
pub const LAYOUT_NAME: &str = "layout";

/// Basename of the root route module in the app directory
pub const ROOT_ROUTE_NAME: &str = "root";

/// Parent id of top-level routes
pub const ROOT_ID: &str = "root";

/// First component of every route id; cannot appear in a real segment
pub const ROUTE_PREFIX: &str = "$";

// ============================================================================
// Entry Points
// ============================================================================

/// Builds the manifest for an app directory, failing on missing prerequisites
///
/// # Errors
///
/// - [`RouteError::MissingRootRoute`] when `app_dir` has no `root.<ext>`
/// - [`RouteError::MissingRoutesDirectory`] when the routes directory is absent
/// - [`RouteError::NonUtf8Path`] when `app_dir` is not valid UTF-8
/// - any discovery or [`build_manifest`] error
pub fn discover_manifest(options: &RoutesOptions, discovery: &dyn FileDiscovery) -> Result<RouteManifest> {
    let app_dir = options.app_dir.as_path();
    let routes_dir = app_dir.join(&options.routes_dir);

    if find_root_route(app_dir).is_none() {
        return Err(RouteError::MissingRootRoute {
            app_dir: app_dir.to_path_buf(),
        });
    }

    if !routes_dir.is_dir() {
        return Err(RouteError::MissingRoutesDirectory { routes_dir });
    }

    let files = discovery.discover(&routes_dir)?;
    tracing::debug!(
        backend = discovery.name(),
        count = files.len(),
        "collected route files"
    );

    let app_dir = app_dir.to_str().ok_or_else(|| RouteError::NonUtf8Path {
        path: app_dir.to_path_buf(),
    })?;
    build_manifest(app_dir, &files, &options.routes_dir)
}

/// Builds the nested route configuration with a given discovery backend
///
/// A missing routes directory is not an error here: the app simply has no
/// file-system routes and the result is empty.
pub fn next_routes_with(options: &RoutesOptions, discovery: &dyn FileDiscovery) -> Result<Vec<RouteConfigEntry>> {
    let routes_dir = options.app_dir.join(&options.routes_dir);
    if !routes_dir.is_dir() {
        tracing::info!(dir = %routes_dir.display(), "no routes directory, no file-system routes");
        return Ok(Vec::new());
    }

    let manifest = discover_manifest(options, discovery)?;
    let config = to_route_config(&manifest);

    tracing::info!(
        entries = manifest.len(),
        top_level = config.len(),
        "built route config"
    );
    Ok(config)
}

/// Builds the nested route configuration by walking the routes directory
///
/// # Examples
///
/// ```no_run
/// use fsroutes::{next_routes, RoutesOptions};
///
/// let routes = next_routes(&RoutesOptions {
///     app_dir: "app".into(),
///     routes_dir: "routes".into(),
///     ignored_route_files: vec!["**/*.css".into()],
/// })?;
/// println!("{}", serde_json::to_string_pretty(&routes).unwrap());
/// # Ok::<(), fsroutes::RouteError>(())
/// ```
pub fn next_routes(options: &RoutesOptions) -> Result<Vec<RouteConfigEntry>> {
    let discovery = WalkDirDiscovery::new(&options.ignored_route_files)?;
    next_routes_with(options, &discovery)
}
