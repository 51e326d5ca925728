//! Where the board widget is served from.
//!
//! During development the page redirects to a Trunk dev server so the
//! widget hot-reloads. Once the bundle is built, `COMPONENT_READY=true`
//! flips the host to the copy embedded in this binary.

/// Dev server Trunk starts by default.
pub const DEFAULT_DEV_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSource {
    /// Serve the compiled bundle embedded in the binary.
    Packaged,
    /// Send page loads to an external dev server.
    DevServer { url: String },
}

impl ComponentSource {
    /// Resolve from the environment: `COMPONENT_READY=true` selects the
    /// packaged bundle, anything else stays on the dev server, and
    /// `KANBAN_DEV_URL` overrides where that is.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("COMPONENT_READY").ok(),
            std::env::var("KANBAN_DEV_URL").ok(),
        )
    }

    fn resolve(ready: Option<String>, dev_url: Option<String>) -> Self {
        let packaged = ready
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if packaged {
            return ComponentSource::Packaged;
        }
        let url = dev_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_DEV_URL.to_string());
        ComponentSource::DevServer { url }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, ComponentSource::DevServer { .. })
    }

    pub fn dev_url(&self) -> Option<&str> {
        match self {
            ComponentSource::DevServer { url } => Some(url),
            ComponentSource::Packaged => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_dev_server() {
        let source = ComponentSource::resolve(None, None);
        assert_eq!(
            source,
            ComponentSource::DevServer {
                url: DEFAULT_DEV_URL.to_string()
            }
        );
        assert!(source.is_dev());
    }

    #[test]
    fn component_ready_selects_the_packaged_bundle() {
        for value in ["true", "TRUE", " True "] {
            let source = ComponentSource::resolve(Some(value.to_string()), None);
            assert_eq!(source, ComponentSource::Packaged);
            assert!(!source.is_dev());
            assert_eq!(source.dev_url(), None);
        }
    }

    #[test]
    fn other_ready_values_stay_on_the_dev_server() {
        for value in ["false", "1", "yes", ""] {
            let source = ComponentSource::resolve(Some(value.to_string()), None);
            assert!(source.is_dev(), "{value:?} should not select the bundle");
        }
    }

    #[test]
    fn dev_url_override_is_trimmed() {
        let source =
            ComponentSource::resolve(None, Some("http://10.0.0.5:9000/ ".to_string()));
        assert_eq!(source.dev_url(), Some("http://10.0.0.5:9000"));
    }

    #[test]
    fn empty_dev_url_override_falls_back_to_the_default() {
        let source = ComponentSource::resolve(None, Some("  ".to_string()));
        assert_eq!(source.dev_url(), Some(DEFAULT_DEV_URL));
    }
}
