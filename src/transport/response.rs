use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{Envelope, FieldError, Meta};

/// Wire shape shared by every list endpoint. `api_id` is not kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ListJsonResponse<T> {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
}

/// Wire shape of a non-2xx response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorJsonBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl<T> Envelope<ListJsonResponse<T>> {
    /// Move `meta` into the envelope and expose `objects` as the payload.
    pub(crate) fn into_page(self) -> Envelope<Vec<T>> {
        let Envelope { data, response, .. } = self;
        Envelope {
            data: data.objects,
            meta: data.meta,
            response,
        }
    }
}

pub fn decode_json_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(body)
}

/// Parse an error body, falling back to an empty message and error list when
/// the body does not have the expected shape.
pub fn decode_error_body(body: &str) -> ErrorJsonBody {
    serde_json::from_str(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawResponse;

    #[test]
    fn error_body_with_field_errors() {
        let body = r#"
        {
          "message": "invalid request",
          "errors": [
            {"resource": "Call", "field": "to", "code": "required"},
            {"resource": "Call", "field": "answer_url", "code": "invalid"}
          ]
        }
        "#;
        let parsed = decode_error_body(body);
        assert_eq!(parsed.message, "invalid request");
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].field, "to");
        assert_eq!(parsed.errors[1].code, "invalid");
    }

    #[test]
    fn error_body_falls_back_to_empty() {
        assert_eq!(decode_error_body("<html>502</html>"), ErrorJsonBody::default());
        assert_eq!(decode_error_body(""), ErrorJsonBody::default());
        assert_eq!(decode_error_body("[1, 2]"), ErrorJsonBody::default());
    }

    #[test]
    fn error_body_accepts_missing_errors_list() {
        let parsed = decode_error_body(r#"{"error": "x", "message": "not found"}"#);
        assert_eq!(parsed.message, "not found");
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn into_page_moves_meta_and_objects() {
        let body = r#"
        {
          "api_id": "abc",
          "meta": {"previous": null, "next": "/v1/Account/MA/Call/?limit=2&offset=2", "total_count": 5, "offset": 0, "limit": 2},
          "objects": [1, 2]
        }
        "#;
        let parsed: ListJsonResponse<u32> = decode_json_body(body).unwrap();
        let page = Envelope::new(parsed, RawResponse::default()).into_page();

        assert_eq!(page.data, vec![1, 2]);
        let meta = page.meta.unwrap();
        assert_eq!(meta.total_count, 5);
        assert_eq!(meta.limit, 2);
        assert_eq!(meta.previous, None);
        assert_eq!(
            meta.next.as_deref(),
            Some("/v1/Account/MA/Call/?limit=2&offset=2")
        );
    }

    #[test]
    fn list_without_meta_keeps_meta_empty() {
        let parsed: ListJsonResponse<u32> = decode_json_body(r#"{"objects": []}"#).unwrap();
        let page = Envelope::new(parsed, RawResponse::default()).into_page();
        assert!(page.data.is_empty());
        assert!(page.meta.is_none());
    }
}
