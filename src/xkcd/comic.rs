use url::Url;

use super::page::ComicImage;

/// One extracted cartoon, never modified once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicRecord {
    pub page_url: Url,
    /// Image address as written to the result document.
    pub image_url: String,
    pub caption: Option<String>,
    pub image: Vec<u8>,
}

impl ComicRecord {
    pub fn new(page_url: Url, image: ComicImage, bytes: Vec<u8>) -> Self {
        Self {
            page_url,
            image_url: image.address,
            caption: image.caption,
            image: bytes,
        }
    }
}
