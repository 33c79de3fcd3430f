use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{Envelope, LimitOffset, Message, MessageCreated, MessageSendParams};
use crate::transport::{ListJsonResponse, Method};

/// SMS sending and message detail records.
#[derive(Debug, Clone, Copy)]
pub struct MessageService<'a> {
    client: &'a PlivoClient,
}

impl<'a> MessageService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn message_path(&self, message_uuid: &str) -> Result<String, PlivoError> {
        let message_uuid = path_segment("message_uuid", message_uuid)?;
        Ok(self.client.account_path(&format!("Message/{message_uuid}/")))
    }

    /// Send a message.
    ///
    /// `dst` may hold several numbers separated by `<`; one uuid comes back per destination.
    pub async fn send(
        &self,
        params: &MessageSendParams,
    ) -> Result<Envelope<MessageCreated>, PlivoError> {
        let path = self.client.account_path("Message/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn list(&self, page: LimitOffset) -> Result<Envelope<Vec<Message>>, PlivoError> {
        let path = self.client.account_path("Message/");
        let list: Envelope<ListJsonResponse<Message>> =
            self.client.request(Method::Get, &path, Some(&page)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, message_uuid: &str) -> Result<Envelope<Message>, PlivoError> {
        let path = self.message_path(message_uuid)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }
}
