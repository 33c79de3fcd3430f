//! Transport layer: URL resolution, query/JSON encoding and response decoding.

mod request;
mod response;

pub use request::{Method, RequestDescriptor, RequestEncoder};
pub use response::{ListJsonResponse, decode_error_body, decode_json_body};
