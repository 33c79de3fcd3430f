use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use url::Url;

use crate::domain::{AuthId, AuthToken};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid request path {path:?}: {source}")]
    Path {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("query string encoding failed: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("JSON body encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP verbs used by the Plivo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Fully resolved request, ready to be handed to an HTTP transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub auth_id: AuthId,
    pub auth_token: AuthToken,
}

/// Resolves relative API paths and encodes parameter objects.
#[derive(Debug, Clone)]
pub struct RequestEncoder {
    base_url: Url,
    user_agent: HeaderValue,
    auth_id: AuthId,
    auth_token: AuthToken,
}

impl RequestEncoder {
    /// `base_url` must end with a trailing slash so relative paths land under it.
    pub fn new(
        base_url: Url,
        user_agent: HeaderValue,
        auth_id: AuthId,
        auth_token: AuthToken,
    ) -> Self {
        Self {
            base_url,
            user_agent,
            auth_id,
            auth_token,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth_id(&self) -> &AuthId {
        &self.auth_id
    }

    /// Build a request for `method` on `path`.
    ///
    /// For `GET` the body is flattened into the query string; for every other
    /// verb it is sent as a JSON object.
    pub fn build<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RequestDescriptor, EncodeError>
    where
        B: Serialize + ?Sized,
    {
        let mut url = self.base_url.join(path).map_err(|source| EncodeError::Path {
            path: path.to_owned(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());

        let mut encoded_body = None;
        if let Some(body) = body {
            if method == Method::Get {
                append_query(&mut url, &serde_urlencoded::to_string(body)?);
            } else {
                encoded_body = Some(serde_json::to_vec(body)?);
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }

        Ok(RequestDescriptor {
            method,
            url,
            headers,
            body: encoded_body,
            auth_id: self.auth_id.clone(),
            auth_token: self.auth_token.clone(),
        })
    }
}

fn append_query(url: &mut Url, encoded: &str) {
    if encoded.is_empty() {
        return;
    }
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded.to_owned(),
    };
    url.set_query(Some(&query));
}
