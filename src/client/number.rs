use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, Envelope, Number, NumberAddParams, NumberEditParams, NumberGroup,
    NumberListParams, NumberRentParams, NumberRental, NumberSearchParams,
};
use crate::transport::{ListJsonResponse, Method};

/// Numbers on the account and the inventory available to rent.
#[derive(Debug, Clone, Copy)]
pub struct NumberService<'a> {
    client: &'a PlivoClient,
}

impl<'a> NumberService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn number_path(&self, number: &str) -> Result<String, PlivoError> {
        let number = path_segment("number", number)?;
        Ok(self.client.account_path(&format!("Number/{number}/")))
    }

    /// Numbers rented by or added to the account.
    pub async fn list(&self, params: &NumberListParams) -> Result<Envelope<Vec<Number>>, PlivoError> {
        let path = self.client.account_path("Number/");
        let list: Envelope<ListJsonResponse<Number>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, number: &str) -> Result<Envelope<Number>, PlivoError> {
        let path = self.number_path(number)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    /// Add numbers from your own carrier.
    pub async fn add(&self, params: &NumberAddParams) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.client.account_path("Number/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn edit(
        &self,
        number: &str,
        params: &NumberEditParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.number_path(number)?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// Release a rented number.
    pub async fn unrent(&self, number: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.number_path(number)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }

    /// Search groups of numbers available to rent.
    pub async fn search(
        &self,
        params: &NumberSearchParams,
    ) -> Result<Envelope<Vec<NumberGroup>>, PlivoError> {
        let path = self.client.account_path("AvailableNumberGroup/");
        let list: Envelope<ListJsonResponse<NumberGroup>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    /// Rent numbers out of the group returned by [`search`](Self::search).
    pub async fn rent(
        &self,
        group_id: &str,
        params: &NumberRentParams,
    ) -> Result<Envelope<NumberRental>, PlivoError> {
        let group_id = path_segment("group_id", group_id)?;
        let path = self
            .client
            .account_path(&format!("AvailableNumberGroup/{group_id}/"));
        self.client.request(Method::Post, &path, Some(params)).await
    }
}
