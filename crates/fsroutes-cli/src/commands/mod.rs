pub mod check;
pub mod manifest;
pub mod routes;

use anyhow::{Context, Result};
use fsroutes::{discover_manifest, RouteManifest, RoutesOptions, WalkDirDiscovery};

/// Walks the routes directory and builds the manifest, with CLI context on failure
pub fn load_manifest(options: &RoutesOptions) -> Result<RouteManifest> {
    let discovery = WalkDirDiscovery::new(&options.ignored_route_files)?;
    discover_manifest(options, &discovery).with_context(|| {
        format!(
            "Failed to build routes for {}",
            options.app_dir.join(&options.routes_dir).display()
        )
    })
}
