/// Path string utilities for route files
///
/// All functions are **pure**: they only look at the strings they are given and
/// never touch the filesystem.

use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::AncestorLayouts;

/// Converts Windows separators to `/`
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`:
/// paths without a backslash are returned borrowed.
///
/// # Examples
///
/// ```
/// use fsroutes::path::normalize_slashes;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_slashes("app/routes/page.tsx"), Cow::Borrowed(_)));
/// assert_eq!(normalize_slashes(r"app\routes\page.tsx"), "app/routes/page.tsx");
/// ```
pub fn normalize_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Splits a path into its components, resolving `.` and `..` lexically
fn components(path: &str) -> Vec<&str> {
    path.split('/').fold(Vec::new(), |mut acc, part| {
        match part {
            "" | "." => {}
            ".." => {
                acc.pop();
            }
            _ => acc.push(part),
        }
        acc
    })
}

/// Lexical POSIX relative path from `from` to `to`
///
/// Same result as a POSIX `path.relative`: shared leading components are
/// removed, every remaining component of `from` becomes `..`, and identical
/// paths yield the empty string.
///
/// # Examples
///
/// ```
/// use fsroutes::path::relative_posix;
///
/// assert_eq!(relative_posix("/app", "/app/routes/blog"), "routes/blog");
/// assert_eq!(relative_posix("/app/", "/app"), "");
/// assert_eq!(relative_posix("/app/routes", "/app/styles"), "../styles");
/// ```
pub fn relative_posix(from: &str, to: &str) -> String {
    let from = components(from);
    let to = components(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    std::iter::repeat("..")
        .take(from.len() - common)
        .chain(to[common..].iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}

/// Joins two POSIX path fragments with a single `/`
///
/// Empty fragments are dropped, so joining onto or with `""` returns the
/// other side unchanged.
///
/// # Examples
///
/// ```
/// use fsroutes::path::join_posix;
///
/// assert_eq!(join_posix("$", "routes/blog"), "$/routes/blog");
/// assert_eq!(join_posix("$", ""), "$");
/// assert_eq!(join_posix("$/", "/routes"), "$/routes");
/// ```
pub fn join_posix(base: &str, rel: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = rel.trim_start_matches('/');
    match (base.is_empty(), rel.is_empty()) {
        (true, _) => rel.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{}/{}", base, rel),
    }
}

/// Returns the directory part of a slash-normalized path
///
/// `"app/routes/page.tsx"` → `"app/routes"`; a bare file name yields `"."`,
/// a file directly under `/` yields `"/"`.
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(pos) => &trimmed[..pos],
        None => ".",
    }
}

/// Returns the last component of a slash-normalized path
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Cleans a user-supplied routes directory name into a bare relative path
///
/// `"./routes/"` → `"routes"`, `r"src\routes"` → `"src/routes"`.
pub fn clean_relative(dir: &str) -> String {
    components(&normalize_slashes(dir)).join("/")
}
