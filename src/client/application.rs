use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, Application, ApplicationCreated, ApplicationParams, Envelope, LimitOffset,
};
use crate::transport::{ListJsonResponse, Method};

/// Voice/messaging applications (answer, hangup and message callbacks).
#[derive(Debug, Clone, Copy)]
pub struct ApplicationService<'a> {
    client: &'a PlivoClient,
}

impl<'a> ApplicationService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn application_path(&self, app_id: &str) -> Result<String, PlivoError> {
        let app_id = path_segment("app_id", app_id)?;
        Ok(self.client.account_path(&format!("Application/{app_id}/")))
    }

    pub async fn create(
        &self,
        params: &ApplicationParams,
    ) -> Result<Envelope<ApplicationCreated>, PlivoError> {
        let path = self.client.account_path("Application/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn list(&self, page: LimitOffset) -> Result<Envelope<Vec<Application>>, PlivoError> {
        let path = self.client.account_path("Application/");
        let list: Envelope<ListJsonResponse<Application>> =
            self.client.request(Method::Get, &path, Some(&page)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, app_id: &str) -> Result<Envelope<Application>, PlivoError> {
        let path = self.application_path(app_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn modify(
        &self,
        app_id: &str,
        params: &ApplicationParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.application_path(app_id)?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn delete(&self, app_id: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.application_path(app_id)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}
