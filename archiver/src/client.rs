use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::bookmark::{Bookmark, ListResponse};
use crate::error::{ArchiverError, Result};
use crate::oauth::{AccessToken, Signer};

pub const INSTAPAPER_API_BASE: &str = "https://www.instapaper.com/api/1";

/// Largest page `bookmarks/list` will return.
pub const LIST_LIMIT: u32 = 500;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Exchanges account credentials for an authenticated session.
pub trait Authenticator {
    type Session: BookmarkService;

    fn authenticate(&self, username: &str, password: &str) -> Result<Self::Session>;
}

/// The two bookmark operations the archive job needs.
pub trait BookmarkService {
    /// Bookmarks carrying `tag`. Failures are reported and yield an empty list.
    fn list_bookmarks(&self, tag: &str) -> Vec<Bookmark>;

    /// Whether the service accepted the archive request.
    fn archive(&self, bookmark_id: i64) -> bool;
}

#[derive(Debug, Clone)]
struct Api {
    http: Client,
    base: String,
}

impl Api {
    fn post(
        &self,
        signer: &Signer,
        path: &str,
        form: &[(&str, String)],
    ) -> reqwest::Result<Response> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), path);
        let authorization = signer.authorization("POST", &url, form);
        debug!("POST {}", url);
        self.http
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .form(form)
            .send()
    }
}

/// Client holding only the consumer credentials.
#[derive(Debug, Clone)]
pub struct InstapaperClient {
    api: Api,
    signer: Signer,
}

impl InstapaperClient {
    pub fn with_options(
        consumer_key: &str,
        consumer_secret: &str,
        api_base: &str,
        timeout: Duration,
    ) -> Result<InstapaperClient> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(InstapaperClient {
            api: Api {
                http,
                base: api_base.to_string(),
            },
            signer: Signer::new(consumer_key, consumer_secret),
        })
    }

    /// xAuth token exchange. Any status other than 200 is a rejection.
    pub fn access_token(&self, username: &str, password: &str) -> Result<AccessToken> {
        let form = [
            ("x_auth_username", username.to_string()),
            ("x_auth_password", password.to_string()),
            ("x_auth_mode", "client_auth".to_string()),
        ];
        let response = self.api.post(&self.signer, "oauth/access_token", &form)?;
        let status = response.status();
        let body = response.text()?;

        if status != StatusCode::OK {
            return Err(ArchiverError::AuthRejected {
                status: status.as_u16(),
                body,
            });
        }

        parse_token_response(&body)
    }

    pub fn authenticated(&self, token: AccessToken) -> Session {
        Session {
            api: self.api.clone(),
            signer: self.signer.with_token(token),
        }
    }
}

impl Authenticator for InstapaperClient {
    type Session = Session;

    fn authenticate(&self, username: &str, password: &str) -> Result<Session> {
        let token = self.access_token(username, password)?;
        info!("Obtained access token for {}", username);
        Ok(self.authenticated(token))
    }
}

/// Client signing every request with the access token.
#[derive(Debug, Clone)]
pub struct Session {
    api: Api,
    signer: Signer,
}

impl BookmarkService for Session {
    fn list_bookmarks(&self, tag: &str) -> Vec<Bookmark> {
        let form = [("limit", LIST_LIMIT.to_string()), ("tag", tag.to_string())];

        let response = match self.api.post(&self.signer, "bookmarks/list", &form) {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error fetching bookmarks: {}", e);
                debug!("bookmarks/list request failed: {}", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            eprintln!("Error fetching bookmarks: {}", status.as_u16());
            eprintln!("{}", response.text().unwrap_or_default());
            debug!("bookmarks/list returned {}", status);
            return Vec::new();
        }

        match response.json::<ListResponse>() {
            Ok(list) => {
                debug!(
                    "Listed {} bookmarks for account {:?}",
                    list.bookmarks.len(),
                    list.account.as_ref().and_then(|a| a.username.as_deref())
                );
                list.bookmarks
            }
            Err(e) => {
                eprintln!("Error fetching bookmarks: unreadable response: {}", e);
                debug!("bookmarks/list body was not a bookmark list: {}", e);
                Vec::new()
            }
        }
    }

    fn archive(&self, bookmark_id: i64) -> bool {
        let form = [("bookmark_id", bookmark_id.to_string())];
        match self.api.post(&self.signer, "bookmarks/archive", &form) {
            Ok(response) => {
                debug!("bookmarks/archive {} returned {}", bookmark_id, response.status());
                response.status() == StatusCode::OK
            }
            Err(e) => {
                warn!("bookmarks/archive {} failed: {}", bookmark_id, e);
                false
            }
        }
    }
}

/// Parses the form-encoded `oauth_token=...&oauth_token_secret=...` body.
pub fn parse_token_response(body: &str) -> Result<AccessToken> {
    let mut token = None;
    let mut secret = None;

    for pair in body.trim().split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string());
        match key {
            "oauth_token" => token = Some(value),
            "oauth_token_secret" => secret = Some(value),
            _ => {}
        }
    }

    Ok(AccessToken {
        token: token.ok_or(ArchiverError::MalformedToken("oauth_token"))?,
        secret: secret.ok_or(ArchiverError::MalformedToken("oauth_token_secret"))?,
    })
}
