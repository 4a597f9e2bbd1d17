//! Task-List API Bindings
//!
//! HTTP calls against the remote REST API, organized by resource.

mod task_lists;
mod tasks;
mod users;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(s: &str) -> String {
    utf8_percent_encode(s, SEGMENT).to_string()
}

/// Encoded path segment for a user-supplied name. `.` and `..` are refused:
/// URL parsing resolves them (even as `%2E`) into a different path.
pub fn name_segment(name: &str) -> ApiResult<String> {
    match name {
        "" => Err(ApiError::Invalid("Name is required".into())),
        "." | ".." => Err(ApiError::Invalid(format!("\"{}\" is not a valid name", name))),
        _ => Ok(encode_segment(name)),
    }
}

/// Client for one API base URL, cheap to clone
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: Client::new() }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get(&self, path: &str, auth: &str) -> RequestBuilder {
        self.http
            .get(self.config.url(path))
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, auth)
    }

    fn post(&self, path: &str, auth: &str) -> RequestBuilder {
        self.http
            .post(self.config.url(path))
            .header(ACCEPT, "*/*")
            .header(AUTHORIZATION, auth)
    }

    fn delete(&self, path: &str, auth: &str) -> RequestBuilder {
        self.http
            .delete(self.config.url(path))
            .header(ACCEPT, "*/*")
            .header(AUTHORIZATION, auth)
    }

    /// Send and return the raw body of a 200 response
    async fn send(&self, label: &str, req: RequestBuilder) -> ApiResult<String> {
        let resp = req.send().await.map_err(|e| {
            log::error!("[API] {} failed: {}", label, e);
            ApiError::from(e)
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        log::debug!("[API] {} -> {}", label, status);
        check_status(status, body).inspect_err(|e| log::warn!("[API] {}: {}", label, e))
    }
}

/// Only 200 counts as success
fn check_status(status: u16, body: String) -> ApiResult<String> {
    if status == 200 {
        Ok(body)
    } else {
        Err(ApiError::from_status(status, body))
    }
}

/// Empty 200 bodies decode like `{}`
fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}
