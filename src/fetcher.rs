use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect;

use crate::error::{CrawlError, Result};

/// Returns the raw markup behind a URL.
pub trait Fetch {
    fn fetch_html(&self, url: &str) -> Result<String>;
}

/// Plain blocking GET: no retries, no custom headers, no timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() > 100 {
                attempt.error("Too many redirects (>100)")
            } else {
                attempt.follow()
            }
        });

        let client = Client::builder()
            .redirect(redirect_policy)
            .timeout(None::<Duration>)
            .build()
            .map_err(CrawlError::HttpClient)?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<String> {
        let to_fetch_error = |source: reqwest::Error| CrawlError::Fetch {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().map_err(to_fetch_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        resp.text().map_err(to_fetch_error)
    }
}
