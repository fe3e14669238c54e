//! # Source Loaders
//!
//! Everything that brings external datasets into memory: the Overpass
//! API loaders (`overpass`), the delimited-file loaders (`csvfile`) and
//! the blocking HTTP transport they share.
//!
//! The HTTP layer sits behind the [`Transport`] trait so the
//! mirror-fallback logic can be exercised in tests with an in-memory
//! fake instead of live network calls. Everything is sequential and
//! blocking: one attempt finishes (success, failure or timeout) before
//! the next endpoint is tried.

pub mod csvfile;
pub mod overpass;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::defaults;
use crate::error::{Error, Result};
use crate::record::Record;

/// Records loaded from a source plus the count of rows that were
/// skipped for missing required fields. Skips are reported, not fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Blocking request/response transport.
///
/// One method per HTTP verb the loaders use. Implementations decide
/// timeouts; callers decide what to do with the body.
pub trait Transport {
    /// POST a form-encoded body and return the response text.
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String>;

    /// GET a URL and return the response text.
    fn get(&self, url: &str) -> Result<String>;
}

/// [`Transport`] backed by a blocking reqwest client with a per-request
/// timeout and the project User-Agent.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(defaults::USER_AGENT)
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;
        Ok(HttpTransport { client })
    }

    fn read_body(url: &str, response: reqwest::blocking::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network {
                url: url.to_string(),
                message: format!("HTTP status {status}"),
            });
        }
        response.text().map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .map_err(|e| Error::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Self::read_body(url, response)
    }

    fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Self::read_body(url, response)
    }
}

/// Load municipality records trying every configured source in order:
/// each Overpass mirror, then the czech-cities CSV export. Individual
/// failures are logged; only when the fallback has failed too does the
/// chain end with [`Error::SourcesExhausted`], counting the CSV export
/// as one more attempt.
pub fn load_municipalities(
    transport: &dyn Transport,
    mirrors: &[&str],
    csv_fallback_url: &str,
) -> Result<Loaded<Record>> {
    match overpass::fetch_municipalities(transport, mirrors) {
        Ok(loaded) => Ok(loaded),
        Err(err) => {
            log::warn!("Overpass mirrors exhausted: {err}");
            log::info!("Falling back to {csv_fallback_url}");
            csvfile::fetch_github_csv(transport, csv_fallback_url).map_err(|err| {
                log::warn!("CSV fallback failed: {err}");
                Error::SourcesExhausted {
                    attempts: mirrors.len() + 1,
                }
            })
        }
    }
}

/// Read previously written municipality records back from a JSON file.
pub fn load_json_records(path: &Path) -> Result<Vec<Record>> {
    let body = fs::read_to_string(path)?;
    serde_json::from_str(&body).map_err(|e| Error::Payload {
        message: format!("{}: {}", path.display(), e),
        excerpt: excerpt(&body),
    })
}

/// Bounded prefix of a payload body for error reporting.
pub(crate) fn excerpt(body: &str) -> String {
    const LIMIT: usize = 200;
    body.trim().chars().take(LIMIT).collect()
}
