//! Error type shared by the manifest builder, discovery, and configuration loading

use std::path::PathBuf;

/// Errors raised while turning a route tree into a manifest
///
/// Every variant is fatal: the build stops at the first invalid file or
/// segment and no partial manifest is returned.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Two or more files resolve to the same `page` or `layout` of one directory
    #[error(
        "Route conflict detected: {} both define the same route. Ensure only one file exists per route path.",
        .files.join(", ")
    )]
    Conflict { files: Vec<String> },

    /// `[[name]]` without the `...` catch-all marker
    #[error(
        "Unsupported segment `{segment}`: optional catch-all segments like `[[...slug]]` are supported, but not patterns like `[[slug]]`."
    )]
    UnsupportedOptionalSegment { segment: String },

    /// `[...name]`, a catch-all that is not optional
    #[error(
        "Catch-all segments like `{segment}` are not supported. Only optional catch-all segments (e.g. `[[...slug]]`) are allowed."
    )]
    UnsupportedCatchAll { segment: String },

    /// A candidate file whose directory does not sit under the routes directory
    #[error("Route file `{file}` is not inside the routes directory `{routes_dir}`")]
    OutsideRoutesDirectory { file: String, routes_dir: String },

    #[error("Could not find a root route module in the app directory: {}", .app_dir.display())]
    MissingRootRoute { app_dir: PathBuf },

    #[error(
        "Could not find the routes directory: {}. Did you forget to create it?",
        .routes_dir.display()
    )]
    MissingRoutesDirectory { routes_dir: PathBuf },

    #[error("Invalid ignore pattern `{pattern}`: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read route files under {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Route ids and `file` values are strings; such a path cannot be represented
    #[error("Path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RouteError>;
