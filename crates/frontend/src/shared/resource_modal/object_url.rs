//! Blob URLs for local image previews.
//!
//! An [`ObjectUrl`] revokes itself when dropped, so replacing, clearing or
//! dropping the [`PreviewSlot`] that holds it always releases the browser
//! resource exactly once.

use web_sys::{Blob, Url};

type Revoke = fn(&str);

fn revoke_in_browser(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("Failed to revoke {}: {:?}", url, e);
    }
}

#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    revoke: Revoke,
}

impl ObjectUrl {
    pub fn from_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(|url| Self {
                url,
                revoke: revoke_in_browser,
            })
            .map_err(|e| format!("{e:?}"))
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        (self.revoke)(&self.url);
    }
}

/// Holds at most one live preview URL.
#[derive(Debug, Default)]
pub struct PreviewSlot(Option<ObjectUrl>);

impl PreviewSlot {
    /// Installs a new preview; the previous one is revoked.
    pub fn replace(&mut self, url: ObjectUrl) -> String {
        let current = url.as_str().to_string();
        self.0 = Some(url);
        current
    }

    /// Preview for a newly selected file. When no URL could be created the
    /// previous file's preview is dropped too, so nothing stale stays shown.
    pub fn install(&mut self, created: Result<ObjectUrl, String>) -> Option<String> {
        match created {
            Ok(url) => Some(self.replace(url)),
            Err(e) => {
                log::warn!("Preview unavailable: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn url(&self) -> Option<&str> {
        self.0.as_ref().map(ObjectUrl::as_str)
    }
}
