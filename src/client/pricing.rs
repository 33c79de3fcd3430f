use crate::client::{PlivoClient, PlivoError};
use crate::domain::{Envelope, Pricing, PricingParams};
use crate::transport::Method;

/// Voice, messaging and number rates per country.
#[derive(Debug, Clone, Copy)]
pub struct PricingService<'a> {
    client: &'a PlivoClient,
}

impl<'a> PricingService<'a> {
    pub(crate) fn new(client: &'a PlivoClient) -> Self {
        Self { client }
    }

    /// Rates for the country with the given two-letter ISO code.
    pub async fn get(&self, country_iso: &str) -> Result<Envelope<Pricing>, PlivoError> {
        let path = self.client.account_path("Pricing/");
        let params = PricingParams {
            country_iso: country_iso.to_owned(),
        };
        self.client.request(Method::Get, &path, Some(&params)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{BASE, FakeTransport, make_client};

    #[tokio::test]
    async fn get_passes_country_in_query() {
        let json = r#"
        {
          "api_id": "X",
          "country": "United States",
          "country_code": 1,
          "country_iso": "US",
          "message": {"inbound": {"rate": "0.00000"}, "outbound": {"rate": "0.00350"}},
          "phone_numbers": {"local": {"rate": "0.80000"}},
          "voice": {"inbound": {"ip": {"rate": "0.00300"}}}
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let pricing = client.pricing().get("US").await.unwrap();
        assert_eq!(pricing.data.country, "United States");
        assert_eq!(pricing.data.country_code, Some(1));
        assert_eq!(pricing.data.message["outbound"]["rate"], "0.00350");
        assert_eq!(transport.last_call(), format!("GET {BASE}Pricing/?country_iso=US"));
    }
}
