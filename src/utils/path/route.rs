//! Web path utilities.
//!
//! Provides consistent URL handling for generated asset references:
//! - Joining web base paths with asset paths
//! - Relative paths between web directories
//! - Link type detection (external vs project-local)
//! - Query string insertion

/// Check if a URL points outside the project.
///
/// True for anything with a URL scheme (`https:`, `data:`, ...) and for
/// protocol-relative URLs (`//cdn.example.com/x.png`).
///
/// # Examples
/// ```ignore
/// assert!(is_external_url("https://example.com/a.png"));
/// assert!(is_external_url("//cdn.example.com/a.png"));
/// assert!(!is_external_url("img/a.png"));
/// ```
#[inline]
pub fn is_external_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    url.find(':').is_some_and(|pos| {
        pos > 0
            && url[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Join a web base path and a relative path with exactly one `/` between them.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_url("/", "img"), "/img");
/// assert_eq!(join_url("/static/", "/img/a.png"), "/static/img/a.png");
/// assert_eq!(join_url("", "img"), "img");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Compute the web path of `to` as seen from a document in `from_dir`.
///
/// Both arguments are slash-separated web paths; leading slashes and `.`
/// segments are ignored.
///
/// # Examples
/// ```ignore
/// assert_eq!(relative_url("css", "img/logo.png"), "../img/logo.png");
/// assert_eq!(relative_url("css", "css/print.css"), "print.css");
/// ```
pub fn relative_url(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = segments(from_dir).collect();
    let to: Vec<&str> = segments(to).collect();
    let Some((file, to_dirs)) = to.split_last() else {
        return String::new();
    };

    let common = from
        .iter()
        .zip(to_dirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
    parts.extend(std::iter::repeat_n("..", from.len() - common));
    parts.extend_from_slice(&to_dirs[common..]);
    parts.push(file);
    parts.join("/")
}

/// Append a query component, keeping any `#fragment` at the end.
///
/// # Examples
/// ```ignore
/// assert_eq!(append_query("a.png", "123"), "a.png?123");
/// assert_eq!(append_query("a.svg?x=1#icon", "123"), "a.svg?x=1&123#icon");
/// ```
pub fn append_query(url: &str, query: &str) -> String {
    let (path, fragment) = url.split_once('#').unwrap_or((url, ""));
    let separator = if path.contains('?') { '&' } else { '?' };
    if fragment.is_empty() {
        format!("{path}{separator}{query}")
    } else {
        format!("{path}{separator}{query}#{fragment}")
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
