//! File discovery: collects candidate route files under a routes directory
//!
//! The manifest builder never touches the filesystem; a [`FileDiscovery`]
//! implementation hands it the list of files instead.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, RouteError};
use crate::path::{normalize_slashes, relative_posix};
use crate::{IGNORED_PREFIX, ROUTE_MODULE_EXTS};

/// Always ignored: any file or directory whose name starts with a dot
pub const DEFAULT_IGNORED_PATTERN: &str = "**/.*";

/// Source of candidate route files
pub trait FileDiscovery {
    /// Returns slash-normalized paths of candidate route files under `routes_dir`
    fn discover(&self, routes_dir: &Path) -> Result<Vec<String>>;

    /// Get discovery backend name
    fn name(&self) -> &'static str;
}

/// Recursive directory walk with ignore globs
///
/// - Names starting with `_` are skipped, and their subtrees are never entered
/// - Paths matching an ignore glob are skipped (directories are pruned)
/// - Files are kept when their name ends in a route module extension
/// - Symlinked files are kept; symlinked directories are not entered
/// - Entries whose path is not valid UTF-8 are skipped with a warning
#[derive(Debug, Clone)]
pub struct WalkDirDiscovery {
    ignored: Vec<Pattern>,
}

impl WalkDirDiscovery {
    /// Compiles the ignore globs, with [`DEFAULT_IGNORED_PATTERN`] first
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidIgnorePattern`] for a glob that does not parse.
    pub fn new<S: AsRef<str>>(ignored_route_files: &[S]) -> Result<Self> {
        let mut patterns: Vec<&str> = vec![DEFAULT_IGNORED_PATTERN];
        for pattern in ignored_route_files.iter().map(AsRef::as_ref) {
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }

        let ignored = patterns
            .into_iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| RouteError::InvalidIgnorePattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { ignored })
    }

    fn match_options() -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        }
    }

    /// Tests a path against every ignore glob
    ///
    /// Globs are tried on the path relative to the routes directory and on the
    /// full path, so both `**/*.css` and absolute patterns work.
    fn is_ignored(&self, full: &str, relative: &str) -> bool {
        let options = Self::match_options();
        self.ignored.iter().any(|pattern| {
            pattern.matches_with(relative, options) || pattern.matches_with(full, options)
        })
    }

    /// Decides whether the walk should skip `entry` (and its subtree)
    fn skip_entry(&self, routes_dir: &str, entry: &DirEntry) -> bool {
        // Never filter the routes directory itself
        if entry.depth() == 0 {
            return false;
        }

        let Some(full) = entry.path().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            return true;
        };

        if entry.file_name().to_str().map_or(false, |name| name.starts_with(IGNORED_PREFIX)) {
            tracing::trace!(path = %full, "skipping ignored-prefix entry");
            return true;
        }

        let full = normalize_slashes(full);
        let relative = relative_posix(routes_dir, &full);
        if self.is_ignored(&full, &relative) {
            tracing::trace!(path = %full, "skipping ignored route file");
            return true;
        }

        false
    }
}

/// Whether a walked entry is a file, or a symlink resolving to one
///
/// Symlinked directories are not entered.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

impl FileDiscovery for WalkDirDiscovery {
    fn discover(&self, routes_dir: &Path) -> Result<Vec<String>> {
        let root = routes_dir.to_str().ok_or_else(|| RouteError::NonUtf8Path {
            path: routes_dir.to_path_buf(),
        })?;
        let root = normalize_slashes(root).into_owned();
        let mut files = Vec::new();

        for entry in WalkDir::new(routes_dir)
            .into_iter()
            .filter_entry(|e| !self.skip_entry(&root, e))
        {
            let entry = entry.map_err(|source| RouteError::Io {
                path: routes_dir.to_path_buf(),
                source,
            })?;

            if !is_file_entry(&entry) {
                continue;
            }

            // Non UTF-8 paths were already pruned by `skip_entry`
            if let Some(path) = entry.path().to_str() {
                if ROUTE_MODULE_EXTS.iter().any(|ext| path.ends_with(ext)) {
                    files.push(normalize_slashes(path).into_owned());
                }
            }
        }

        files.sort();
        tracing::debug!(count = files.len(), dir = %root, "discovered route files");
        Ok(files)
    }

    fn name(&self) -> &'static str {
        "walkdir"
    }
}

/// A fixed, pre-collected file list
///
/// For callers that already hold the candidate files (build tools, tests).
#[derive(Debug, Clone, Default)]
pub struct StaticDiscovery {
    files: Vec<String>,
}

impl StaticDiscovery {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileDiscovery for StaticDiscovery {
    fn discover(&self, _routes_dir: &Path) -> Result<Vec<String>> {
        Ok(self
            .files
            .iter()
            .map(|file| normalize_slashes(file).into_owned())
            .collect())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Locates the root route module (`root.<ext>`) of an app directory
///
/// Extensions are tried in [`ROUTE_MODULE_EXTS`] order; the first existing
/// file wins.
pub fn find_root_route(app_dir: &Path) -> Option<PathBuf> {
    ROUTE_MODULE_EXTS
        .iter()
        .map(|ext| app_dir.join(format!("{}{}", crate::ROOT_ROUTE_NAME, ext)))
        .find(|candidate| candidate.is_file())
}
