/// Grouping of candidate route files into per-directory stems

use indexmap::IndexMap;

use crate::error::{Result, RouteError};
use crate::path::{basename, dirname, join_posix, normalize_slashes, relative_posix};
use crate::{ROUTE_MODULE_EXTS, ROUTE_PREFIX};

/// All candidate files that share one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStem {
    /// `$/` followed by the directory path relative to the app directory
    pub id: String,
    /// Slash-normalized file paths, in input order
    pub files: Vec<String>,
}

impl RouteStem {
    /// Finds the single file of this stem named `<name>.<ext>`
    ///
    /// Files with other names (helpers, styles, ...) are ignored.
    ///
    /// # Errors
    ///
    /// [`RouteError::Conflict`] when more than one file matches, e.g.
    /// `page.tsx` next to `page.jsx`.
    pub fn find_module(&self, name: &str) -> Result<Option<&str>> {
        let matches: Vec<&str> = self
            .files
            .iter()
            .map(String::as_str)
            .filter(|file| is_module_named(basename(file), name))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            _ => Err(RouteError::Conflict {
                files: matches.iter().map(|f| f.to_string()).collect(),
            }),
        }
    }
}

/// Checks whether `filename` is exactly `<name><ext>` for a route module extension
fn is_module_named(filename: &str, name: &str) -> bool {
    filename
        .strip_prefix(name)
        .map_or(false, |ext| ROUTE_MODULE_EXTS.contains(&ext))
}

/// Stem id of the directory holding `file`
///
/// ```
/// use fsroutes::manifest::stem::stem_id;
///
/// assert_eq!(stem_id("/app", "/app/routes/blog/page.tsx"), "$/routes/blog");
/// assert_eq!(stem_id("/app", "/app/routes/page.tsx"), "$/routes");
/// ```
pub fn stem_id(app_dir: &str, file: &str) -> String {
    join_posix(ROUTE_PREFIX, &relative_posix(app_dir, dirname(file)))
}

/// Groups files by directory and orders the stems shallowest first
///
/// Stems are sorted by ascending id length. An ancestor's id is a strict
/// prefix of its descendants' ids, so every ancestor comes before the stems
/// below it. The sort is stable: equal lengths keep first-seen order.
pub fn group_stems<S: AsRef<str>>(app_dir: &str, files: &[S]) -> Vec<RouteStem> {
    let app_dir = normalize_slashes(app_dir);

    let grouped = files.iter().fold(
        IndexMap::<String, Vec<String>>::new(),
        |mut acc, file| {
            let file = normalize_slashes(file.as_ref()).into_owned();
            acc.entry(stem_id(&app_dir, &file)).or_default().push(file);
            acc
        },
    );

    let mut stems: Vec<RouteStem> = grouped
        .into_iter()
        .map(|(id, files)| RouteStem { id, files })
        .collect();
    stems.sort_by_key(|stem| stem.id.len());
    stems
}
