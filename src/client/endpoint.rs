use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, Endpoint, EndpointCreateParams, EndpointCreated, EndpointModifyParams, Envelope,
    LimitOffset,
};
use crate::transport::{ListJsonResponse, Method};

/// SIP endpoints.
#[derive(Debug, Clone, Copy)]
pub struct EndpointService<'a> {
    client: &'a PlivoClient,
}

impl<'a> EndpointService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn endpoint_path(&self, endpoint_id: &str) -> Result<String, PlivoError> {
        let endpoint_id = path_segment("endpoint_id", endpoint_id)?;
        Ok(self.client.account_path(&format!("Endpoint/{endpoint_id}/")))
    }

    pub async fn list(&self, page: LimitOffset) -> Result<Envelope<Vec<Endpoint>>, PlivoError> {
        let path = self.client.account_path("Endpoint/");
        let list: Envelope<ListJsonResponse<Endpoint>> =
            self.client.request(Method::Get, &path, Some(&page)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, endpoint_id: &str) -> Result<Envelope<Endpoint>, PlivoError> {
        let path = self.endpoint_path(endpoint_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    /// Create an endpoint; the response carries the generated `endpoint_id`.
    pub async fn create(
        &self,
        params: &EndpointCreateParams,
    ) -> Result<Envelope<EndpointCreated>, PlivoError> {
        let path = self.client.account_path("Endpoint/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn modify(
        &self,
        endpoint_id: &str,
        params: &EndpointModifyParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.endpoint_path(endpoint_id)?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn delete(&self, endpoint_id: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.endpoint_path(endpoint_id)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}
