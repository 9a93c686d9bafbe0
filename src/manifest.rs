//! Precache manifest: the ordered list of URLs a service worker stores
//! ahead of network requests.
//!
//! The manifest is user-supplied configuration. It is loaded from JSON,
//! validated, and checked against an asset root so that every listed URL
//! resolves to a real file.

use crate::error::ManifestError;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecacheManifest {
    /// Versioned cache bucket name, e.g. `app-v1`.
    pub cache_name: String,
    /// Absolute URL paths, in the order they are cached.
    pub urls: Vec<String>,
    /// URLs served by the application rather than straight from disk,
    /// mapped to the file (relative to the asset root) behind them.
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

impl PrecacheManifest {
    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&contents)?;
        tracing::debug!(
            cache = %manifest.cache_name,
            urls = manifest.urls.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json).map_err(ManifestError::Parse)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.cache_name.trim().is_empty() {
            return Err(ManifestError::EmptyCacheName);
        }
        let mut seen = HashSet::new();
        for url in self.urls.iter().chain(self.routes.keys()) {
            if !url.starts_with('/') {
                return Err(ManifestError::RelativeUrl(url.clone()));
            }
            for seg in segments(url) {
                if seg == ".." {
                    return Err(ManifestError::ParentSegment(url.clone()));
                }
                if seg.contains(['/', '\\']) {
                    return Err(ManifestError::EncodedSeparator(url.clone()));
                }
            }
        }
        for file in self.routes.values() {
            let inside = Path::new(file)
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
            if file.is_empty() || file.starts_with(['/', '\\']) || !inside {
                return Err(ManifestError::RouteOutsideRoot(file.clone()));
            }
        }
        for url in &self.urls {
            if !seen.insert(url.as_str()) {
                return Err(ManifestError::DuplicateUrl(url.clone()));
            }
        }
        Ok(())
    }

    /// File on disk that answers `url`.
    pub fn resolve(&self, root: &Path, url: &str) -> PathBuf {
        match self.routes.get(url) {
            Some(file) => root.join(file),
            None => segments(url).fold(root.to_path_buf(), |mut path, seg| {
                path.push(seg.as_ref());
                path
            }),
        }
    }

    /// URLs whose file is missing under `root`, in manifest order.
    pub fn missing_assets(&self, root: &Path) -> Vec<&str> {
        self.urls
            .iter()
            .filter(|url| !self.resolve(root, url).is_file())
            .map(String::as_str)
            .collect()
    }

    /// The URL list as a JavaScript array literal for `urlsToCache`.
    pub fn to_js_array(&self) -> String {
        // serde_json string escaping is valid JavaScript
        serde_json::to_string_pretty(&self.urls).unwrap_or_else(|_| "[]".to_string())
    }
}

fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

/// Non-empty path segments of `url`, percent-decoded.
fn segments(url: &str) -> impl Iterator<Item = Cow<'_, str>> {
    strip_query(url)
        .split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| percent_decode_str(seg).decode_utf8_lossy())
}
