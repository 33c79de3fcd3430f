use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    Account, AccountModifyParams, ApiResponse, Envelope, LimitOffset, Subaccount,
    SubaccountCreated,
};
use crate::transport::{ListJsonResponse, Method};

/// Main account and subaccount operations.
#[derive(Debug, Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a PlivoClient,
}

impl<'a> AccountService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn subaccount_path(&self, auth_id: &str) -> Result<String, PlivoError> {
        let auth_id = path_segment("auth_id", auth_id)?;
        Ok(self.client.account_path(&format!("Subaccount/{auth_id}/")))
    }

    /// Fetch the main account.
    pub async fn get(&self) -> Result<Envelope<Account>, PlivoError> {
        let path = self.client.account_path("");
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn modify(
        &self,
        params: &AccountModifyParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.client.account_path("");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    /// Create a subaccount.
    ///
    /// The returned record carries the `auth_id` and `auth_token` Plivo assigned.
    pub async fn create_subaccount(
        &self,
        subaccount: &Subaccount,
    ) -> Result<Envelope<Subaccount>, PlivoError> {
        let path = self.client.account_path("Subaccount/");
        let created: Envelope<SubaccountCreated> = self
            .client
            .request(Method::Post, &path, Some(subaccount))
            .await?;

        Ok(created.map(|created| Subaccount {
            api_id: created.api_id,
            auth_id: created.auth_id,
            auth_token: created.auth_token,
            ..subaccount.clone()
        }))
    }

    /// Update `name`/`enabled` of the subaccount identified by `subaccount.auth_id`.
    pub async fn modify_subaccount(
        &self,
        subaccount: &Subaccount,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.subaccount_path(&subaccount.auth_id)?;
        self.client.request(Method::Post, &path, Some(subaccount)).await
    }

    pub async fn get_subaccount(&self, auth_id: &str) -> Result<Envelope<Subaccount>, PlivoError> {
        let path = self.subaccount_path(auth_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn list_subaccounts(
        &self,
        page: LimitOffset,
    ) -> Result<Envelope<Vec<Subaccount>>, PlivoError> {
        let path = self.client.account_path("Subaccount/");
        let list: Envelope<ListJsonResponse<Subaccount>> =
            self.client.request(Method::Get, &path, Some(&page)).await?;
        Ok(list.into_page())
    }

    pub async fn delete_subaccount(&self, auth_id: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.subaccount_path(auth_id)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}
