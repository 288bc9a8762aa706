use std::path::PathBuf;

/// Default prefix for locally served media.
pub const DEFAULT_BASE: &str = "/dke_media";

/// Text shown where an image could not be found.
pub const PLACEHOLDER: &str = "Image not found";

/// What an asset key resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Url(String),
    /// The asset is missing; render the placeholder instead.
    Placeholder,
}

impl Asset {
    pub fn label(&self) -> &str {
        match self {
            Asset::Url(url) => url,
            Asset::Placeholder => PLACEHOLDER,
        }
    }
}

/// Turns opaque asset keys (`images/poker.JPG`) into displayable URLs.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base: String,
    local_root: Option<PathBuf>,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, None)
    }
}

impl AssetResolver {
    /// `base` may be a path prefix or a CDN URL. With `local_root` set,
    /// keys missing under it resolve to the placeholder.
    pub fn new(base: &str, local_root: Option<PathBuf>) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            local_root,
        }
    }

    pub fn url(&self, key: &str) -> String {
        format!("{}/{}", self.base, key.trim_start_matches('/'))
    }

    pub fn resolve(&self, key: &str) -> Asset {
        if key.trim().is_empty() {
            return Asset::Placeholder;
        }
        match &self.local_root {
            Some(root) if !root.join(key.trim_start_matches('/')).is_file() => Asset::Placeholder,
            _ => Asset::Url(self.url(key)),
        }
    }
}
