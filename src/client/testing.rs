use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use reqwest::header::HeaderValue;
use url::Url;

use super::{BoxFuture, HttpTransport, PlivoClient};
use crate::domain::{AuthId, AuthToken, RawResponse};
use crate::transport::{RequestDescriptor, RequestEncoder};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<RequestDescriptor>,
    response_status: u16,
    response_body: String,
    failure: Option<String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response_status,
                response_body: response_body.into(),
                failure: None,
            })),
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        let transport = Self::new(0, "");
        transport.state.lock().unwrap().failure = Some(message.into());
        transport
    }

    pub(crate) fn last_request(&self) -> Option<RequestDescriptor> {
        self.state.lock().unwrap().last_request.clone()
    }

    /// JSON body of the last request, `Null` when none was sent.
    pub(crate) fn last_json_body(&self) -> serde_json::Value {
        self.last_request()
            .and_then(|request| request.body)
            .map(|body| serde_json::from_slice(&body).unwrap())
            .unwrap_or(serde_json::Value::Null)
    }

    /// `METHOD url` of the last request.
    pub(crate) fn last_call(&self) -> String {
        let request = self.last_request().expect("no request was sent");
        format!("{} {}", request.method, request.url)
    }
}

impl HttpTransport for FakeTransport {
    fn execute(
        &self,
        request: RequestDescriptor,
    ) -> BoxFuture<'_, Result<RawResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.last_request = Some(request);
            if let Some(failure) = state.failure.clone() {
                return Err(failure.into());
            }
            Ok(RawResponse {
                status: state.response_status,
                headers: Default::default(),
                body: state.response_body.clone(),
            })
        })
    }
}

pub(crate) const BASE: &str = "https://api.example.invalid/v1/Account/MA123/";

pub(crate) fn make_client(transport: FakeTransport) -> PlivoClient {
    PlivoClient {
        encoder: RequestEncoder::new(
            Url::parse("https://api.example.invalid/v1/Account/").unwrap(),
            HeaderValue::from_static("plivo-rs/test"),
            AuthId::new("MA123").unwrap(),
            AuthToken::new("token").unwrap(),
        ),
        http: Arc::new(transport),
    }
}

pub(crate) const ACK: &str = r#"{"api_id": "api-1", "message": "changed"}"#;
