//! Page route - source to output path and URL mapping.

use std::path::{Path, PathBuf};

use crate::utils::path::to_slash;

/// Source -> output path mapping for a page
///
/// # Example
///
/// ```text
/// Source: content/blog/hello.md
///
/// PageRoute {
///     relative:    blog/hello.md
///     url:         /blog/hello.html   (/blog/hello with clean URLs)
///     output_file: public/blog/hello.html
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRoute {
    /// Source path relative to the content directory, `/`-separated.
    pub relative: String,
    /// URL path, starting with `/`.
    pub url: String,
    /// Rendered HTML file in the output directory.
    pub output_file: PathBuf,
}

impl PageRoute {
    pub fn new(relative: &Path, output_dir: &Path, clean_urls: bool) -> Self {
        let relative = to_slash(relative);
        let url = url_path(&relative, clean_urls);
        let output_file = output_dir.join(html_path(&relative));
        Self {
            relative,
            url,
            output_file,
        }
    }
}

/// Strip a trailing `index.md` segment and map `.md` to `.html`.
///
/// Idempotent: `canonical_path(canonical_path(p)) == canonical_path(p)`.
pub fn canonical_path(relative: &str) -> String {
    let path = if relative == "index.md" {
        ""
    } else {
        relative.strip_suffix("/index.md").map_or(relative, |dir| {
            // keep the trailing slash of the directory
            &relative[..dir.len() + 1]
        })
    };
    match path.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => path.to_string(),
    }
}

/// URL path for a content-relative source path.
fn url_path(relative: &str, clean_urls: bool) -> String {
    let canonical = canonical_path(relative);
    let path = if clean_urls {
        canonical.strip_suffix(".html").unwrap_or(&canonical)
    } else {
        &canonical
    };
    format!("/{path}")
}

/// Output file path (relative) for a content-relative source path.
fn html_path(relative: &str) -> String {
    match relative.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => relative.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_path() {
        assert_eq!(canonical_path("index.md"), "");
        assert_eq!(canonical_path("blog/index.md"), "blog/");
        assert_eq!(canonical_path("blog/post.md"), "blog/post.html");
        assert_eq!(canonical_path("contact.md"), "contact.html");
        // `index.md` must be a whole segment
        assert_eq!(canonical_path("reindex.md"), "reindex.html");
    }

    #[test]
    fn test_canonical_path_idempotent() {
        for path in ["index.md", "blog/index.md", "blog/post.md", "about.html", "a/b/"] {
            let once = canonical_path(path);
            assert_eq!(canonical_path(&once), once, "not idempotent for {path}");
        }
    }

    #[test]
    fn test_route_urls() {
        let out = Path::new("/site/public");

        let root = PageRoute::new(Path::new("index.md"), out, false);
        assert_eq!(root.url, "/");
        assert_eq!(root.output_file, out.join("index.html"));

        let post = PageRoute::new(Path::new("blog/post.md"), out, false);
        assert_eq!(post.url, "/blog/post.html");
        assert_eq!(post.relative, "blog/post.md");
        assert_eq!(post.output_file, out.join("blog/post.html"));

        let section = PageRoute::new(Path::new("blog/index.md"), out, false);
        assert_eq!(section.url, "/blog/");
        assert_eq!(section.output_file, out.join("blog/index.html"));
    }

    #[test]
    fn test_route_clean_urls() {
        let out = Path::new("/site/public");
        let post = PageRoute::new(Path::new("blog/post.md"), out, true);
        assert_eq!(post.url, "/blog/post");
        assert_eq!(post.output_file, out.join("blog/post.html"));

        assert_eq!(PageRoute::new(Path::new("index.md"), out, true).url, "/");
        assert_eq!(PageRoute::new(Path::new("blog/index.md"), out, true).url, "/blog/");
    }
}
