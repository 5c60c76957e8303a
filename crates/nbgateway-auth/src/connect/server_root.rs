use std::fmt;

/// Normalized root URL of a notebook gateway.
///
/// Always ends in `/`, so endpoint paths such as `login?` or `hub/api` can
/// be appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerRoot(String);

impl ServerRoot {
    /// Normalizes `url` into a server root. Returns `None` for an empty URL.
    pub fn parse(url: &str) -> Option<Self> {
        if url.is_empty() {
            return None;
        }

        let mut root = url.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }

        Some(Self(root))
    }

    /// The root URL, trailing slash included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends an endpoint path to the root.
    pub(crate) fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Whether the root addresses a single-user server spawned by a hub,
    /// recognizable by the `/user/` segment in its URL.
    pub(crate) fn looks_hub_spawned(&self) -> bool {
        self.0.to_lowercase().contains("/user/")
    }
}

impl fmt::Display for ServerRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_appends_missing_trailing_slash() {
        let root = ServerRoot::parse("http://localhost:8888").unwrap();
        assert_eq!(root.as_str(), "http://localhost:8888/");
    }

    #[test]
    fn test_parse_keeps_existing_trailing_slash() {
        let root = ServerRoot::parse("http://localhost:8888/").unwrap();
        assert_eq!(root.as_str(), "http://localhost:8888/");
    }

    #[test]
    fn test_parse_rejects_empty_url() {
        assert_eq!(ServerRoot::parse(""), None);
    }

    #[test]
    fn test_join_appends_path_verbatim() {
        let root = ServerRoot::parse("http://localhost:8888").unwrap();
        assert_eq!(root.join("login?"), "http://localhost:8888/login?");
        assert_eq!(root.join("hub/api"), "http://localhost:8888/hub/api");
    }

    #[test]
    fn test_hub_spawned_detection_is_case_insensitive() {
        let spawned = ServerRoot::parse("https://hub.example.com/USER/alice").unwrap();
        assert!(spawned.looks_hub_spawned());

        let plain = ServerRoot::parse("https://notebook.example.com/").unwrap();
        assert!(!plain.looks_hub_spawned());
    }
}
