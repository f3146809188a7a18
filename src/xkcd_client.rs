use log::debug;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

use crate::errors::{Error, Result};

/// HTTP access to the comic site, one request in flight at a time.
#[derive(Debug, Clone)]
pub struct XkcdClient {
    http: Client,
    base_url: String,
}

impl XkcdClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Fail early on a base address that can never produce a page url
        Url::parse(base_url)?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The base address with the decimal id appended.
    pub fn page_url(&self, id: u32) -> Result<Url> {
        Ok(Url::parse(&format!("{}{id}", self.base_url))?)
    }

    pub async fn get_page(&self, url: &Url) -> Result<String> {
        let response = self.get(url).await?;
        response
            .text()
            .await
            .map_err(|err| Error::from_request(url.as_str(), err))
    }

    pub async fn get_image(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::from_request(url.as_str(), err))?;
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: &Url) -> Result<Response> {
        debug!("GET {url}");
        self.http
            .get(url.clone())
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|err| Error::from_request(url.as_str(), err))
    }
}
