use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, Conference, ConferenceNames, ConferencePlayParams, ConferenceSpeakParams,
    Envelope, RecordParams, RecordingStarted,
};
use crate::transport::Method;

/// Running conferences and their members.
///
/// `members` arguments accept a single member id, a comma separated list, or `all`.
#[derive(Debug, Clone, Copy)]
pub struct ConferenceService<'a> {
    client: &'a PlivoClient,
}

impl<'a> ConferenceService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn conference_path(&self, name: &str, action: &str) -> Result<String, PlivoError> {
        let name = path_segment("conference_name", name)?;
        Ok(self
            .client
            .account_path(&format!("Conference/{name}/{action}")))
    }

    fn member_path(&self, name: &str, members: &str, action: &str) -> Result<String, PlivoError> {
        let members = path_segment("member_id", members)?;
        self.conference_path(name, &format!("Member/{members}/{action}"))
    }

    /// Names of all running conferences.
    pub async fn list(&self) -> Result<Envelope<ConferenceNames>, PlivoError> {
        let path = self.client.account_path("Conference/");
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn get(&self, name: &str) -> Result<Envelope<Conference>, PlivoError> {
        let path = self.conference_path(name, "")?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn hangup_all(&self) -> Result<Envelope<()>, PlivoError> {
        let path = self.client.account_path("Conference/");
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn hangup(&self, name: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.conference_path(name, "")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn hangup_member(&self, name: &str, members: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn kick_members(&self, name: &str, members: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Kick/")?;
        self.client.request_empty(Method::Post, &path, NO_BODY).await
    }

    pub async fn mute_members(&self, name: &str, members: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Mute/")?;
        self.client.request_empty(Method::Post, &path, NO_BODY).await
    }

    pub async fn unmute_members(
        &self,
        name: &str,
        members: &str,
    ) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Mute/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    /// Play the audio file at `url` to the members.
    pub async fn play(
        &self,
        name: &str,
        members: &str,
        url: &str,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.member_path(name, members, "Play/")?;
        let body = ConferencePlayParams {
            url: url.to_owned(),
        };
        self.client.request(Method::Post, &path, Some(&body)).await
    }

    pub async fn stop_playing(&self, name: &str, members: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Play/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn speak(
        &self,
        name: &str,
        members: &str,
        params: &ConferenceSpeakParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.member_path(name, members, "Speak/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// Stop the members from hearing the conference.
    pub async fn deafen_members(
        &self,
        name: &str,
        members: &str,
    ) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Deaf/")?;
        self.client.request_empty(Method::Post, &path, NO_BODY).await
    }

    pub async fn undeafen_members(
        &self,
        name: &str,
        members: &str,
    ) -> Result<Envelope<()>, PlivoError> {
        let path = self.member_path(name, members, "Deaf/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    pub async fn record(
        &self,
        name: &str,
        params: &RecordParams,
    ) -> Result<Envelope<RecordingStarted>, PlivoError> {
        let path = self.conference_path(name, "Record/")?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn stop_recording(&self, name: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.conference_path(name, "Record/")?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}
