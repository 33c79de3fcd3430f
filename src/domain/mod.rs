//! Domain layer: credentials, request parameters and response records (no I/O).

mod account;
mod application;
mod call;
mod carrier;
mod conference;
mod endpoint;
mod message;
mod number;
mod pricing;
mod recording;
mod response;
mod validation;
mod value;

pub use account::{Account, AccountModifyParams, Plan, Subaccount, SubaccountCreated};
pub use application::{Application, ApplicationCreated, ApplicationParams};
pub use call::{
    Call, CallCreated, CallDtmfParams, CallListParams, CallMakeParams, CallPlayParams,
    CallSpeakParams, CallTransferParams, LiveCall, LiveCalls, RecordParams, RecordingStarted,
    RequestUuid,
};
pub use carrier::{
    CarrierListParams, IncomingCarrier, IncomingCarrierParams, OutgoingCarrier,
    OutgoingCarrierParams,
};
pub use conference::{Conference, ConferenceNames, ConferenceSpeakParams, Member};
pub use endpoint::{Endpoint, EndpointCreateParams, EndpointCreated, EndpointModifyParams};
pub use message::{Message, MessageCreated, MessageSendParams};
pub use number::{
    Number, NumberAddParams, NumberEditParams, NumberGroup, NumberListParams, NumberRentParams,
    NumberRental, NumberSearchParams, RentedNumber,
};
pub use pricing::Pricing;
pub use recording::{Recording, RecordingListParams};
pub use response::{ApiResponse, Envelope, FieldError, Meta, RawResponse};
pub use validation::ValidationError;
pub use value::{AuthId, AuthToken, LimitOffset};

pub(crate) use call::StopRecordingParams;
pub(crate) use conference::ConferencePlayParams;
pub(crate) use pricing::PricingParams;
pub(crate) use value::{is_false, is_zero};
