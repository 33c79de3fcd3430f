use crate::client::{NO_BODY, PlivoClient, PlivoError, path_segment};
use crate::domain::{
    ApiResponse, CarrierListParams, Envelope, IncomingCarrier, IncomingCarrierParams,
    OutgoingCarrier, OutgoingCarrierParams,
};
use crate::transport::{ListJsonResponse, Method};

/// Carriers allowed to send traffic into the account.
#[derive(Debug, Clone, Copy)]
pub struct IncomingCarrierService<'a> {
    client: &'a PlivoClient,
}

impl<'a> IncomingCarrierService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn carrier_path(&self, carrier_id: &str) -> Result<String, PlivoError> {
        let carrier_id = path_segment("carrier_id", carrier_id)?;
        Ok(self
            .client
            .account_path(&format!("IncomingCarrier/{carrier_id}/")))
    }

    pub async fn list(
        &self,
        params: &CarrierListParams,
    ) -> Result<Envelope<Vec<IncomingCarrier>>, PlivoError> {
        let path = self.client.account_path("IncomingCarrier/");
        let list: Envelope<ListJsonResponse<IncomingCarrier>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, carrier_id: &str) -> Result<Envelope<IncomingCarrier>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn add(
        &self,
        params: &IncomingCarrierParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.client.account_path("IncomingCarrier/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn modify(
        &self,
        carrier_id: &str,
        params: &IncomingCarrierParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn remove(&self, carrier_id: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}

/// Carriers used to route outbound calls.
#[derive(Debug, Clone, Copy)]
pub struct OutgoingCarrierService<'a> {
    client: &'a PlivoClient,
}

impl<'a> OutgoingCarrierService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    fn carrier_path(&self, carrier_id: &str) -> Result<String, PlivoError> {
        let carrier_id = path_segment("carrier_id", carrier_id)?;
        Ok(self
            .client
            .account_path(&format!("OutgoingCarrier/{carrier_id}/")))
    }

    pub async fn list(
        &self,
        params: &CarrierListParams,
    ) -> Result<Envelope<Vec<OutgoingCarrier>>, PlivoError> {
        let path = self.client.account_path("OutgoingCarrier/");
        let list: Envelope<ListJsonResponse<OutgoingCarrier>> =
            self.client.request(Method::Get, &path, Some(params)).await?;
        Ok(list.into_page())
    }

    pub async fn get(&self, carrier_id: &str) -> Result<Envelope<OutgoingCarrier>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request(Method::Get, &path, NO_BODY).await
    }

    pub async fn add(
        &self,
        params: &OutgoingCarrierParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.client.account_path("OutgoingCarrier/");
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn modify(
        &self,
        carrier_id: &str,
        params: &OutgoingCarrierParams,
    ) -> Result<Envelope<ApiResponse>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request(Method::Post, &path, Some(params)).await
    }

    pub async fn remove(&self, carrier_id: &str) -> Result<Envelope<()>, PlivoError> {
        let path = self.carrier_path(carrier_id)?;
        self.client.request_empty(Method::Delete, &path, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{ACK, BASE, FakeTransport, make_client};
    use crate::client::PlivoError;
    use crate::domain::{
        CarrierListParams, IncomingCarrierParams, OutgoingCarrierParams, ValidationError,
    };

    #[tokio::test]
    async fn incoming_carrier_lifecycle() {
        let json = r#"{"api_id":"X","meta":{"total_count":1,"limit":20,"offset":0},"objects":[{"carrier_id":"ic-1","name":"upstream","ip_set":"10.0.0.1,10.0.0.2","voice":true}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());
        let carriers = client.incoming_carrier();

        let params = CarrierListParams {
            name: Some("upstream".to_owned()),
            ..Default::default()
        };
        let page = carriers.list(&params).await.unwrap();
        assert_eq!(page.data[0].ip_set, "10.0.0.1,10.0.0.2");
        assert!(page.data[0].voice);
        assert_eq!(transport.last_call(), format!("GET {BASE}IncomingCarrier/?name=upstream"));

        carriers.get("ic-1").await.unwrap();
        assert_eq!(transport.last_call(), format!("GET {BASE}IncomingCarrier/ic-1/"));

        let transport = FakeTransport::new(201, ACK);
        let client = make_client(transport.clone());
        let carriers = client.incoming_carrier();

        carriers
            .add(&IncomingCarrierParams::new("upstream", "10.0.0.1"))
            .await
            .unwrap();
        assert_eq!(transport.last_call(), format!("POST {BASE}IncomingCarrier/"));
        assert_eq!(
            transport.last_json_body(),
            serde_json::json!({"name": "upstream", "ip_set": "10.0.0.1"})
        );

        let modify = IncomingCarrierParams {
            ip_set: Some("10.0.0.3".to_owned()),
            ..Default::default()
        };
        carriers.modify("ic-1", &modify).await.unwrap();
        assert_eq!(transport.last_call(), format!("POST {BASE}IncomingCarrier/ic-1/"));
        assert_eq!(transport.last_json_body(), serde_json::json!({"ip_set": "10.0.0.3"}));

        carriers.remove("ic-1").await.unwrap();
        assert_eq!(transport.last_call(), format!("DELETE {BASE}IncomingCarrier/ic-1/"));
    }

    #[tokio::test]
    async fn outgoing_carrier_lifecycle() {
        let transport = FakeTransport::new(201, ACK);
        let client = make_client(transport.clone());
        let carriers = client.outgoing_carrier();

        let params = OutgoingCarrierParams {
            retries: Some(2),
            ..OutgoingCarrierParams::new("trunk", "sip.example.invalid")
        };
        carriers.add(&params).await.unwrap();
        assert_eq!(transport.last_call(), format!("POST {BASE}OutgoingCarrier/"));
        assert_eq!(
            transport.last_json_body(),
            serde_json::json!({"name": "trunk", "address": "sip.example.invalid", "retries": 2})
        );

        carriers
            .modify("oc-1", &OutgoingCarrierParams::default())
            .await
            .unwrap();
        assert_eq!(transport.last_call(), format!("POST {BASE}OutgoingCarrier/oc-1/"));
        assert_eq!(transport.last_json_body(), serde_json::json!({}));

        carriers.remove("oc-1").await.unwrap();
        assert_eq!(transport.last_call(), format!("DELETE {BASE}OutgoingCarrier/oc-1/"));

        let json = r#"{"carrier_id":"oc-1","address":"sip.example.invalid","retries":2}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());
        let carrier = client.outgoing_carrier().get("oc-1").await.unwrap();
        assert_eq!(carrier.data.retries, Some(2));
        assert_eq!(transport.last_call(), format!("GET {BASE}OutgoingCarrier/oc-1/"));
    }

    #[tokio::test]
    async fn carrier_ids_are_escaped_and_required() {
        let transport = FakeTransport::new(200, "{}");
        let client = make_client(transport.clone());

        client.outgoing_carrier().get("oc#1").await.unwrap();
        assert_eq!(transport.last_call(), format!("GET {BASE}OutgoingCarrier/oc%231/"));

        let err = client.incoming_carrier().remove("..").await.unwrap_err();
        assert!(matches!(
            err,
            PlivoError::Validation(ValidationError::InvalidPathSegment { field: "carrier_id", .. })
        ));
        let err = client
            .incoming_carrier()
            .modify("", &IncomingCarrierParams::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PlivoError::Validation(ValidationError::Empty { field: "carrier_id" })
        ));
    }
}
