use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, Call, CallCreated, CallDtmfParams, CallListParams, CallMakeParams,
    CallPlayParams, CallSpeakParams, CallTransferParams, Envelope, LiveCall, LiveCalls,
    RecordParams, RecordingStarted, StopRecordingParams,
};
use crate::transport::{ListJsonResponse, Method};

/// Outbound calls, call detail records and live call control.
#[derive(Debug, Clone, Copy)]
pub struct CallService<'a> {
    client: &'a PlivoClient,
}

impl<'a> CallService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn call_path(&self, uuid: &str, action: &str) -> Result<String, PlivoError> {
        let uuid = path_segment("call_uuid", uuid)?;
        Ok(self.client.account_path(&format!("Call/{uuid}/{action}")))
    }

    /// Queue an outbound call.
    pub async fn make(&self, params: &CallMakeParams) -> Result<Envelope<CallCreated>, PlivoError> {
        let path = self.client.account_path("Call/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// List completed calls.
    pub async fn list(&self, params: &CallListParams) -> Result<Envelope<Vec<Call>>, PlivoError> {
        let path = self.client.account_path("Call/");
        let list: Envelope<ListJsonResponse<Call>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, uuid: &str) -> Result<Envelope<Call>, PlivoError> {
        let path = self.call_path(uuid, "")?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    /// UUIDs of every call currently in progress.
    pub async fn list_live(&self) -> Result<Envelope<LiveCalls>, PlivoError> {
        let path = self.client.account_path("Call/?status=live");
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn get_live(&self, uuid: &str) -> Result<Envelope<LiveCall>, PlivoError> {
        let path = self.call_path(uuid, "?status=live")?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn hangup(&self, uuid: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.call_path(uuid, "")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn transfer(
        &self,
        uuid: &str,
        params: &CallTransferParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.call_path(uuid, "")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn record(
        &self,
        uuid: &str,
        params: &RecordParams,
    ) -> Result<Envelope<RecordingStarted>, PlivoError> {
        let path = self.call_path(uuid, "Record/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// Stop the recording at `url`, or every recording on the call when `url` is `None`.
    pub async fn stop_recording(
        &self,
        uuid: &str,
        url: Option<&str>,
    ) -> Result<Envelope<()>, PlivoError> {
        let path = self.call_path(uuid, "Record/")?;
        let body = url.map(|url| StopRecordingParams {
            url: Some(url.to_owned()),
        });
        self.client
            .request_empty(Method::Delete, &path, body.as_ref())
            .await
    }

    pub async fn play(
        &self,
        uuid: &str,
        params: &CallPlayParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.call_path(uuid, "Play/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn stop_playing(&self, uuid: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.call_path(uuid, "Play/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    /// Read text to the call (text to speech).
    pub async fn speak(
        &self,
        uuid: &str,
        params: &CallSpeakParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.call_path(uuid, "Speak/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn stop_speaking(&self, uuid: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.call_path(uuid, "Speak/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    /// Send DTMF digits on the call.
    pub async fn send_digits(
        &self,
        uuid: &str,
        params: &CallDtmfParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.call_path(uuid, "DTMF/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// Cancel a queued call that has not been answered yet.
    pub async fn cancel_request(&self, request_uuid: &str) -> Result<Envelope<()>, PlivoError> {
        let request_uuid = path_segment("request_uuid", request_uuid)?;
        let path = self
            .client
            .account_path(&format!("Request/{request_uuid}/"));
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}
