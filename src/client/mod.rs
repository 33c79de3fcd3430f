//! Client layer: owns the HTTP transport and runs the request pipeline every
//! resource service goes through.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AuthId, AuthToken, Envelope, RawResponse, ValidationError};
use crate::transport::{self, Method, RequestDescriptor, RequestEncoder};

mod account;
mod application;
mod call;
mod carrier;
mod conference;
mod endpoint;
mod error;
mod message;
mod number;
mod pricing;
mod recording;
#[cfg(test)]
mod testing;

pub use account::AccountService;
pub use application::ApplicationService;
pub use call::CallService;
pub use carrier::{IncomingCarrierService, OutgoingCarrierService};
pub use conference::ConferenceService;
pub use endpoint::EndpointService;
pub use error::{ApiError, PlivoError};
pub use message::MessageService;
pub use number::NumberService;
pub use pricing::PricingService;
pub use recording::RecordingService;

const API_VERSION: &str = "v1";
const DEFAULT_HOST: &str = "https://api.plivo.com";
const DEFAULT_USER_AGENT: &str = concat!("plivo-rs/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Placeholder body for calls that send no parameters.
pub(crate) const NO_BODY: Option<&()> = None;

/// Bytes left as-is inside a single path segment. `,` stays literal for member lists.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',')
    .remove(b'+')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Encode a caller-supplied identifier so it always resolves to exactly one path segment.
pub(crate) fn path_segment(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value == "." || value == ".." {
        return Err(ValidationError::InvalidPathSegment {
            field,
            input: value.to_owned(),
        });
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

trait HttpTransport: Send + Sync {
    fn execute(
        &self,
        request: RequestDescriptor,
    ) -> BoxFuture<'_, Result<RawResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        request: RequestDescriptor,
    ) -> BoxFuture<'_, Result<RawResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = to_reqwest(&self.client, request).send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            // Reading the body to the end hands the connection back to the pool.
            let body = response.text().await?;
            Ok(RawResponse {
                status,
                headers,
                body,
            })
        })
    }
}

/// Put an encoded request on the wire: headers, Basic auth and the optional body.
fn to_reqwest(client: &reqwest::Client, request: RequestDescriptor) -> reqwest::RequestBuilder {
    let RequestDescriptor {
        method,
        url,
        headers,
        body,
        auth_id,
        auth_token,
    } = request;

    let builder = client
        .request(method.into(), url)
        .headers(headers)
        .basic_auth(auth_id.as_str(), Some(auth_token.as_str()));
    match body {
        Some(body) => builder.body(body),
        None => builder,
    }
}

#[derive(Debug, Clone)]
/// Credentials for Plivo API calls, sent as HTTP Basic auth.
pub struct Auth {
    auth_id: AuthId,
    auth_token: AuthToken,
}

impl Auth {
    /// Validate and pair an auth id with its token.
    pub fn new(
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            auth_id: AuthId::new(auth_id)?,
            auth_token: AuthToken::new(auth_token)?,
        })
    }

    /// Read `PLIVO_AUTH_ID` and `PLIVO_AUTH_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        let auth_id = std::env::var(AuthId::ENV)
            .map_err(|_| ValidationError::MissingEnv { var: AuthId::ENV })?;
        let auth_token = std::env::var(AuthToken::ENV)
            .map_err(|_| ValidationError::MissingEnv { var: AuthToken::ENV })?;
        Self::new(auth_id, auth_token)
    }

    pub fn auth_id(&self) -> &AuthId {
        &self.auth_id
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PlivoClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct PlivoClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl PlivoClientBuilder {
    /// Create a builder with the default base URL and user-agent and no timeout.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: default_base_url(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the API base URL (`https://api.plivo.com/v1/Account/` by default).
    ///
    /// A trailing slash is added when missing so relative paths resolve under it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`PlivoClient`].
    pub fn build(self) -> Result<PlivoClient, PlivoError> {
        let encoder = self.encoder()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| PlivoError::Transport(Box::new(err)))?;

        Ok(PlivoClient {
            encoder,
            http: Arc::new(ReqwestTransport { client }),
        })
    }

    fn encoder(&self) -> Result<RequestEncoder, ValidationError> {
        let base_url = parse_base_url(&self.base_url)?;
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "user_agent",
            });
        }
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| ValidationError::InvalidHeader {
                field: "user_agent",
            })?;
        Ok(RequestEncoder::new(
            base_url,
            user_agent,
            self.auth.auth_id.clone(),
            self.auth.auth_token.clone(),
        ))
    }
}

fn default_base_url() -> String {
    format!("{DEFAULT_HOST}/{API_VERSION}/Account/")
}

fn parse_base_url(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|err| ValidationError::InvalidUrl {
        input: input.to_owned(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::InvalidUrl {
            input: input.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Plivo client.
///
/// Cheap to clone and safe to share between tasks: credentials and base URL are
/// fixed at construction and the HTTP connection pool is shared.
///
/// Resource operations live on the service handles returned by
/// [`account`](Self::account), [`call`](Self::call), [`message`](Self::message) and friends.
pub struct PlivoClient {
    encoder: RequestEncoder,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PlivoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlivoClient")
            .field("base_url", &self.encoder.base_url().as_str())
            .field("auth_id", self.encoder.auth_id())
            .finish_non_exhaustive()
    }
}

impl PlivoClient {
    /// Create a client using the default base URL and user-agent.
    ///
    /// For more customization, use [`PlivoClient::builder`].
    pub fn new(auth: Auth) -> Self {
        let base_url = Url::parse(&default_base_url()).expect("default base URL is valid");
        Self {
            encoder: RequestEncoder::new(
                base_url,
                HeaderValue::from_static(DEFAULT_USER_AGENT),
                auth.auth_id,
                auth.auth_token,
            ),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> PlivoClientBuilder {
        PlivoClientBuilder::new(auth)
    }

    pub fn auth_id(&self) -> &AuthId {
        self.encoder.auth_id()
    }

    pub fn base_url(&self) -> &Url {
        self.encoder.base_url()
    }

    pub fn account(&self) -> AccountService<'_> {
        AccountService::new(self)
    }

    pub fn application(&self) -> ApplicationService<'_> {
        ApplicationService::new(self)
    }

    pub fn call(&self) -> CallService<'_> {
        CallService::new(self)
    }

    pub fn conference(&self) -> ConferenceService<'_> {
        ConferenceService::new(self)
    }

    pub fn endpoint(&self) -> EndpointService<'_> {
        EndpointService::new(self)
    }

    pub fn incoming_carrier(&self) -> IncomingCarrierService<'_> {
        IncomingCarrierService::new(self)
    }

    pub fn outgoing_carrier(&self) -> OutgoingCarrierService<'_> {
        OutgoingCarrierService::new(self)
    }

    pub fn message(&self) -> MessageService<'_> {
        MessageService::new(self)
    }

    pub fn number(&self) -> NumberService<'_> {
        NumberService::new(self)
    }

    pub fn pricing(&self) -> PricingService<'_> {
        PricingService::new(self)
    }

    pub fn recording(&self) -> RecordingService<'_> {
        RecordingService::new(self)
    }

    /// Path relative to the base URL, scoped to this account.
    ///
    /// `suffix` is inserted verbatim; identifiers in it must already be
    /// encoded with [`path_segment`].
    pub(crate) fn account_path(&self, suffix: &str) -> String {
        let auth_id = utf8_percent_encode(self.encoder.auth_id().as_str(), PATH_SEGMENT);
        format!("{auth_id}/{suffix}")
    }

    /// Send a request and decode the successful body into `T`.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<T>, PlivoError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, body).await?;
        match transport::decode_json_body(&response.body) {
            Ok(data) => Ok(Envelope::new(data, response)),
            Err(source) => Err(PlivoError::Decoding {
                source,
                response: Box::new(response),
            }),
        }
    }

    /// Send a request whose successful body carries nothing worth decoding.
    pub(crate) async fn request_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<()>, PlivoError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.execute(method, path, body).await?;
        Ok(Envelope::new((), response))
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, PlivoError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .encoder
            .build(method, path, body)
            .map_err(|err| PlivoError::Encoding(Box::new(err)))?;
        let url = request.url.clone();

        tracing::debug!(%method, %url, "sending Plivo API request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(PlivoError::Transport)?;
        tracing::debug!(%method, %url, status = response.status, "received Plivo API response");

        if !response.is_success() {
            let body = transport::decode_error_body(&response.body);
            tracing::warn!(
                %method,
                %url,
                status = response.status,
                message = %body.message,
                "Plivo API request failed"
            );
            return Err(PlivoError::Api(Box::new(error::ApiError {
                method,
                url,
                status: response.status,
                message: body.message,
                errors: body.errors,
                response,
            })));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeTransport, make_client};
    use super::*;
    use crate::domain::{Account, LimitOffset, Meta};
    use crate::transport::ListJsonResponse;

    #[tokio::test]
    async fn request_decodes_success_body_and_keeps_response() {
        let transport = FakeTransport::new(200, r#"{"api_id":"X","auth_id":"ID1","name":"Acme"}"#);
        let client = make_client(transport.clone());

        let envelope: Envelope<Account> = client
            .request(Method::Get, "MA123/", NO_BODY)
            .await
            .unwrap();
        assert_eq!(envelope.data.name, "Acme");
        assert_eq!(envelope.status(), 200);
        assert!(envelope.meta.is_none());

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.as_str(), "https://api.example.invalid/v1/Account/MA123/");
        assert_eq!(request.auth_id.as_str(), "MA123");
        assert_eq!(request.auth_token.as_str(), "token");
    }

    #[tokio::test]
    async fn non_success_status_is_api_error_with_parsed_body() {
        let transport = FakeTransport::new(401, r#"{"message":"unauthorized","errors":[]}"#);
        let client = make_client(transport);

        let err = client
            .request::<_, Account>(Method::Get, "MA123/", NO_BODY)
            .await
            .unwrap_err();
        let api = err.as_api().expect("api error");
        assert_eq!(api.status, 401);
        assert_eq!(api.message, "unauthorized");
        assert!(api.errors.is_empty());
        assert_eq!(api.method, Method::Get);
        assert_eq!(api.response.body, r#"{"message":"unauthorized","errors":[]}"#);
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_empty_details() {
        let transport = FakeTransport::new(502, "<html>bad gateway</html>");
        let client = make_client(transport);

        let err = client
            .request_empty(Method::Delete, "MA123/Call/abc/", NO_BODY)
            .await
            .unwrap_err();
        let api = err.as_api().expect("api error");
        assert_eq!(api.status, 502);
        assert!(api.message.is_empty());
        assert!(api.errors.is_empty());
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn status_boundaries_follow_2xx_range() {
        for (status, ok) in [(199, false), (200, true), (299, true), (300, false), (404, false)] {
            let client = make_client(FakeTransport::new(status, "{}"));
            let result = client
                .request_empty(Method::Post, "MA123/", NO_BODY)
                .await;
            assert_eq!(result.is_ok(), ok, "status {status}");
        }
    }

    #[tokio::test]
    async fn invalid_success_body_is_decoding_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client
            .request::<_, Account>(Method::Get, "MA123/", NO_BODY)
            .await
            .unwrap_err();
        assert!(matches!(err, PlivoError::Decoding { .. }));
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn mismatched_success_body_is_decoding_error() {
        let client = make_client(FakeTransport::new(200, r#"{"objects": "nope"}"#));
        let err = client
            .request::<_, ListJsonResponse<Account>>(Method::Get, "MA123/Subaccount/", NO_BODY)
            .await
            .unwrap_err();
        assert!(matches!(err, PlivoError::Decoding { .. }));
    }

    #[tokio::test]
    async fn empty_request_skips_decoding() {
        let client = make_client(FakeTransport::new(204, ""));
        let envelope = client
            .request_empty(Method::Delete, "MA123/Call/abc/", NO_BODY)
            .await
            .unwrap();
        assert_eq!(envelope.status(), 204);
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced_unchanged() {
        let client = make_client(FakeTransport::failing("connection refused"));
        let err = client
            .request_empty(Method::Get, "MA123/", NO_BODY)
            .await
            .unwrap_err();
        match err {
            PlivoError::Transport(source) => assert_eq!(source.to_string(), "connection refused"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_path_fails_before_sending() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());
        let err = client
            .request_empty(Method::Get, "http://[::1", NO_BODY)
            .await
            .unwrap_err();
        assert!(matches!(err, PlivoError::Encoding(_)));
        assert!(transport.last_request().is_none());
    }

    #[tokio::test]
    async fn list_pages_keep_meta_for_default_window() {
        let json = r#"
        {
          "api_id": "X",
          "meta": {"previous": null, "next": null, "total_count": 1, "offset": 0, "limit": 20},
          "objects": [{"auth_id": "SUB1", "name": "sub1", "enabled": true}]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let page = client
            .request::<_, ListJsonResponse<crate::domain::Subaccount>>(
                Method::Get,
                "MA123/Subaccount/",
                Some(&LimitOffset::default()),
            )
            .await
            .unwrap()
            .into_page();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].auth_id, "SUB1");
        assert_eq!(
            page.meta,
            Some(Meta {
                total_count: 1,
                limit: 20,
                ..Default::default()
            })
        );
        assert_eq!(transport.last_request().unwrap().url.query(), None);
    }

    #[test]
    fn path_segment_escapes_url_syntax() {
        assert_eq!(path_segment("name", "room1").unwrap(), "room1");
        assert_eq!(path_segment("name", "room?x=1").unwrap(), "room%3Fx=1");
        assert_eq!(path_segment("name", "room#1").unwrap(), "room%231");
        assert_eq!(path_segment("name", "a/Member/all").unwrap(), "a%2FMember%2Fall");
        assert_eq!(path_segment("name", "sales team").unwrap(), "sales%20team");
        assert_eq!(path_segment("name", "%2e%2e").unwrap(), "%252e%252e");
        assert_eq!(path_segment("members", "17,18").unwrap(), "17,18");
        assert_eq!(path_segment("number", "+14155550100").unwrap(), "+14155550100");
        assert_eq!(path_segment("name", "...").unwrap(), "...");
    }

    #[test]
    fn path_segment_rejects_empty_and_dot_segments() {
        assert_eq!(
            path_segment("app_id", ""),
            Err(ValidationError::Empty { field: "app_id" })
        );
        assert_eq!(
            path_segment("app_id", "  "),
            Err(ValidationError::Empty { field: "app_id" })
        );
        for input in [".", ".."] {
            assert_eq!(
                path_segment("app_id", input),
                Err(ValidationError::InvalidPathSegment {
                    field: "app_id",
                    input: input.to_owned(),
                })
            );
        }
    }

    #[tokio::test]
    async fn escaped_segment_survives_url_join() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport.clone());
        let name = path_segment("conference_name", "room#1?x=/..").unwrap();
        let path = client.account_path(&format!("Conference/{name}/"));
        client
            .request_empty(Method::Delete, &path, NO_BODY)
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query(), None);
        assert_eq!(
            url.as_str(),
            "https://api.example.invalid/v1/Account/MA123/Conference/room%231%3Fx=%2F../"
        );
    }

    fn wire_encoder() -> RequestEncoder {
        RequestEncoder::new(
            Url::parse("https://api.example.invalid/v1/Account/").unwrap(),
            HeaderValue::from_static("plivo-rs/test"),
            AuthId::new("MA123").unwrap(),
            AuthToken::new("token").unwrap(),
        )
    }

    #[test]
    fn reqwest_request_carries_basic_auth_user_agent_and_body() {
        use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

        let descriptor = wire_encoder()
            .build(
                Method::Post,
                "MA123/Message/",
                Some(&serde_json::json!({"text": "hi"})),
            )
            .unwrap();
        let request = to_reqwest(&reqwest::Client::new(), descriptor)
            .build()
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.invalid/v1/Account/MA123/Message/"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "Basic TUExMjM6dG9rZW4=");
        assert_eq!(request.headers()[USER_AGENT], "plivo-rs/test");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            request.body().and_then(|body| body.as_bytes()),
            Some(br#"{"text":"hi"}"#.as_slice())
        );
    }

    #[test]
    fn reqwest_request_without_body_still_authenticates() {
        use reqwest::header::AUTHORIZATION;

        let descriptor = wire_encoder()
            .build(Method::Delete, "MA123/Call/c-1/", NO_BODY)
            .unwrap();
        let request = to_reqwest(&reqwest::Client::new(), descriptor)
            .build()
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::DELETE);
        assert!(request.body().is_none());
        assert!(request.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::new("   ", "token").is_err());
        assert!(Auth::new("MA123", "").is_err());
        assert_eq!(Auth::new(" MA123 ", "t").unwrap().auth_id().as_str(), "MA123");
    }

    #[test]
    fn builder_normalizes_base_url() {
        let client = PlivoClient::builder(Auth::new("MA123", "token").unwrap())
            .base_url("http://127.0.0.1:8080/v1/Account")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/v1/Account/");
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = PlivoClient::builder(Auth::new("MA123", "token").unwrap())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PlivoError::Validation(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn builder_rejects_blank_user_agent() {
        let err = PlivoClient::builder(Auth::new("MA123", "token").unwrap())
            .user_agent("  ")
            .build()
            .unwrap_err();
        assert!(matches!(err, PlivoError::Validation(_)));
    }

    #[test]
    fn default_client_targets_plivo_v1() {
        let client = PlivoClient::new(Auth::new("MA123", "token").unwrap());
        assert_eq!(client.base_url().as_str(), "https://api.plivo.com/v1/Account/");
        assert_eq!(client.account_path("Call/"), "MA123/Call/");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("token"));
    }
}
