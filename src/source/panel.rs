//! Live 3x-ui panel client: login exchange plus authenticated inbound
//! listing. Compatible with MHSanaei/3x-ui session handling.

use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::Client;
use serde_json::json;
use tracing::{info, instrument};

use super::types::{flatten_inbounds, UserRecord, XuiListResponse};
use crate::errors::SourceError;

const SESSION_COOKIE: &str = "session";

/// Opaque session credential issued by the panel after a successful login,
/// required on subsequent requests.
#[derive(Debug, Clone)]
pub struct XuiSession {
    cookie: String,
}

impl XuiSession {
    fn header_value(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.cookie)
    }
}

/// Client for the 3x-ui panel HTTP API.
#[derive(Clone)]
pub struct XuiClient {
    http_client: Client,
    base_url: String,
}

impl XuiClient {
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Performs the login exchange. The panel answers a successful login
    /// with a `session` cookie; its absence is an authentication failure
    /// even on a 2xx response.
    #[instrument(skip(self, password), err)]
    pub async fn login(&self, username: &str, password: &str) -> Result<XuiSession, SourceError> {
        let url = format!("{}/login", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| SourceError::Authentication {
                message: format!("failed to call login: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Authentication {
                message: format!("login returned {status}"),
            });
        }

        let cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| extract_cookie(value, SESSION_COOKIE))
            .ok_or_else(|| SourceError::Authentication {
                message: "no session cookie in login response".to_string(),
            })?;

        info!("authenticated against 3x-ui panel");
        Ok(XuiSession { cookie })
    }

    /// Lists all inbounds with the session cookie and flattens their clients
    /// into migration records, identically to the snapshot path.
    #[instrument(skip(self, session), err)]
    pub async fn fetch_inbounds(
        &self,
        session: &XuiSession,
    ) -> Result<Vec<UserRecord>, SourceError> {
        let url = format!("{}/panel/api/inbounds/list", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .header(COOKIE, session.header_value())
            .send()
            .await
            .map_err(|e| SourceError::Api {
                message: format!("failed to list inbounds: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                message: format!("inbound listing returned {status}"),
            });
        }

        let listing: XuiListResponse = response.json().await.map_err(|e| SourceError::Api {
            message: format!("malformed inbound listing: {e}"),
        })?;

        let users = flatten_inbounds(listing.obj);
        info!("fetched {} users from 3x-ui", users.len());
        Ok(users)
    }
}

/// Pulls a named cookie value out of a single `Set-Cookie` header line.
fn extract_cookie(header: &str, name: &str) -> Option<String> {
    let first = header.split(';').next()?.trim();
    let (cookie_name, value) = first.split_once('=')?;
    if cookie_name.trim() == name && !value.is_empty() {
        Some(value.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_session_cookie_with_attributes() {
        let header = "session=MTcyOTU0; Path=/; HttpOnly; Max-Age=3600";
        assert_eq!(
            extract_cookie(header, "session"),
            Some("MTcyOTU0".to_string())
        );
    }

    #[test]
    fn extracts_bare_session_cookie() {
        assert_eq!(
            extract_cookie("session=abc123", "session"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn ignores_other_cookies() {
        assert_eq!(extract_cookie("lang=en; Path=/", "session"), None);
    }

    #[test]
    fn rejects_empty_session_value() {
        assert_eq!(extract_cookie("session=; Path=/", "session"), None);
    }

    #[test]
    fn session_header_value_round_trips() {
        let session = XuiSession {
            cookie: "abc123".to_string(),
        };
        assert_eq!(session.header_value(), "session=abc123");
    }
}
