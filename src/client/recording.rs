use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{Envelope, Recording, RecordingListParams};
use crate::transport::{ListJsonResponse, Method};

/// Stored call and conference recordings.
#[derive(Debug, Clone, Copy)]
pub struct RecordingService<'a> {
    client: &'a PlivoClient,
}

impl<'a> RecordingService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn recording_path(&self, recording_id: &str) -> Result<String, PlivoError> {
        let recording_id = path_segment("recording_id", recording_id)?;
        Ok(self.client.account_path(&format!("Recording/{recording_id}/")))
    }

    pub async fn list(
        &self,
        params: &RecordingListParams,
    ) -> Result<Envelope<Vec<Recording>>, PlivoError> {
        let path = self.client.account_path("Recording/");
        let list: Envelope<ListJsonResponse<Recording>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, recording_id: &str) -> Result<Envelope<Recording>, PlivoError> {
        let path = self.recording_path(recording_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }
}
