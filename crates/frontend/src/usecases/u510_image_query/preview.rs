use web_sys::{Blob, Url};

/// `blob:` URL pointing at the locally selected file.
///
/// The URL is revoked by [`ObjectUrl::release`] (called once the preview
/// image has loaded) or, at the latest, when the guard is dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    released: bool,
}

impl ObjectUrl {
    pub fn create(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(|url| Self {
                url,
                released: false,
            })
            .map_err(|e| format!("{e:?}"))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn release(&mut self) {
        self.release_with(|url| {
            if let Err(e) = Url::revoke_object_url(url) {
                log::warn!("failed to revoke preview url {}: {:?}", url, e);
            }
        });
    }

    fn release_with(&mut self, revoke: impl FnOnce(&str)) {
        if self.released {
            return;
        }
        self.released = true;
        revoke(&self.url);
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.release();
    }
}
