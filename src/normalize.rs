use crate::context::{HostNormalizer, IdnaHostNormalizer};
use crate::scheme::default_port;
use crate::url::Url;

/// Normalization operations: idempotent, component-local rewrites that
/// preserve the URL's resolved meaning. None of them run implicitly; the
/// caller invokes them explicitly.
impl Url {
    /// Run every per-component normalizer in fixed order: host, port,
    /// path, query, fragment.
    pub fn normalize(&mut self) -> &mut Self {
        self.normalize_host()
            .normalize_port()
            .normalize_path()
            .normalize_query()
            .normalize_fragment()
    }

    /// Canonicalize the hostname with the default [`IdnaHostNormalizer`].
    pub fn normalize_host(&mut self) -> &mut Self {
        self.normalize_host_with(&IdnaHostNormalizer)
    }

    /// Canonicalize the hostname with an injected collaborator. A
    /// normalizer returning `None` leaves the host untouched.
    pub fn normalize_host_with(&mut self, normalizer: &dyn HostNormalizer) -> &mut Self {
        if let Some(host) = normalizer.normalize_host_text(&self.components.host) {
            self.components.host = host;
        }
        self
    }

    /// Drop the port when it equals the scheme's registered default.
    pub fn normalize_port(&mut self) -> &mut Self {
        if self.components.port.is_empty() {
            return self;
        }
        if let Some(default) = default_port(&self.components.protocol) {
            if self.components.port.parse() == Ok(default) {
                self.components.port.clear();
            }
        }
        self
    }

    /// Collapse "." and ".." segments and repeated slashes in the path.
    pub fn normalize_path(&mut self) -> &mut Self {
        self.components.path = collapse_path(&self.components.path);
        self
    }

    /// Drop a stored-but-empty query marker, so a bare '?' is never
    /// emitted.
    pub fn normalize_query(&mut self) -> &mut Self {
        if self.components.query.as_deref() == Some("") {
            self.components.query = None;
        }
        self
    }

    /// Drop a stored-but-empty fragment marker, so a bare '#' is never
    /// emitted.
    pub fn normalize_fragment(&mut self) -> &mut Self {
        if self.components.fragment.as_deref() == Some("") {
            self.components.fragment = None;
        }
        self
    }
}

/// Collapse "." and ".." segments and repeated slashes. Relative paths
/// keep leading ".." segments that cannot be collapsed; an absolute path
/// never climbs above its root.
fn collapse_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/')
        || path.ends_with("/.")
        || path.ends_with("/..")
        || path == "."
        || path == "..";

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&"..")) || (segments.is_empty() && !absolute) {
                    segments.push("..");
                } else {
                    // Pops a real segment, or is dropped at an absolute root
                    segments.pop();
                }
            }
            segment => segments.push(segment),
        }
    }

    let mut out = String::with_capacity(path.len());
    if absolute {
        out.push('/');
    }
    out.push_str(&segments.join("/"));
    if trailing && !out.is_empty() && !out.ends_with('/') {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_path_dot_segments() {
        assert_eq!(collapse_path("/a/./b/../c"), "/a/c");
        assert_eq!(collapse_path("/a/b/../"), "/a/");
        assert_eq!(collapse_path("/./foo"), "/foo");
        assert_eq!(collapse_path("/a/b/c/.."), "/a/b/");
    }

    #[test]
    fn test_collapse_path_repeated_slashes() {
        assert_eq!(collapse_path("/a//b///c"), "/a/b/c");
        assert_eq!(collapse_path("//"), "/");
    }

    #[test]
    fn test_collapse_path_absolute_root_is_a_floor() {
        assert_eq!(collapse_path("/../a"), "/a");
        assert_eq!(collapse_path("/.."), "/");
    }

    #[test]
    fn test_collapse_path_relative_keeps_leading_dotdot() {
        assert_eq!(collapse_path("../path/index.html"), "../path/index.html");
        assert_eq!(collapse_path("../../a"), "../../a");
        assert_eq!(collapse_path("a/../b"), "b");
    }

    #[test]
    fn test_collapse_path_degenerate_inputs() {
        assert_eq!(collapse_path(""), "");
        assert_eq!(collapse_path("/"), "/");
        assert_eq!(collapse_path("."), "");
        assert_eq!(collapse_path("a/.."), "");
    }

    #[test]
    fn test_collapse_path_idempotent() {
        for path in ["/a/./b/../c", "../x", "/a//b/", "", "/"] {
            let once = collapse_path(path);
            assert_eq!(collapse_path(&once), once, "path: {path}");
        }
    }
}
