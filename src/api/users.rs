//! User Endpoints
//!
//! Login, registration and logout.

use super::{decode, ApiClient};
use crate::error::ApiResult;
use crate::models::{ApiMessage, LoginResponse, RegisterBody};
use crate::session::basic_auth;

pub const LOGIN: &str = "/v1/users/login";
pub const REGISTER: &str = "/v1/users/register";
pub const LOGOUT: &str = "/v1/users/logout";

impl ApiClient {
    /// Exchange username/password for a token
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let req = self
            .post(LOGIN, &basic_auth(username, password))
            .json(&serde_json::json!({}));
        let body = self.send("login", req).await?;
        let resp: LoginResponse = decode(&body)?;
        log::info!("[API] login ok for {}", username);
        Ok(resp.token)
    }

    pub async fn register(&self, username: &str, password: &str, name: Option<&str>) -> ApiResult<ApiMessage> {
        let req = self
            .post(REGISTER, &basic_auth(username, password))
            .json(&RegisterBody { name });
        let body = self.send("register", req).await?;
        decode(&body)
    }

    /// `auth` is the replayed token header
    pub async fn logout(&self, auth: &str) -> ApiResult<ApiMessage> {
        let req = self
            .http
            .post(self.config.url(LOGOUT))
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::AUTHORIZATION, auth);
        let body = self.send("logout", req).await?;
        decode(&body)
    }
}
