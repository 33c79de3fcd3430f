//! Typed Rust client for the Plivo REST API.
//!
//! Every call goes through the same pipeline: build the request (query string
//! for `GET`, JSON body otherwise), sign it with HTTP Basic auth, execute it,
//! decode the body and turn non-2xx responses into [`PlivoError::Api`].
//! Resources are grouped into service handles borrowed from [`PlivoClient`].
//!
//! ```rust,no_run
//! use plivo::{Auth, MessageSendParams, PlivoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlivoClient::new(Auth::from_env()?);
//!
//!     let account = client.account().get().await?;
//!     println!("cash credits: {}", account.data.cash_credits);
//!
//!     let params = MessageSendParams::new("14155550100", "14155550101", "hello");
//!     let sent = client.message().send(&params).await?;
//!     println!("queued: {:?}", sent.data.message_uuid);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AccountService, ApiError, ApplicationService, Auth, CallService, ConferenceService,
    EndpointService, IncomingCarrierService, MessageService, NumberService,
    OutgoingCarrierService, PlivoClient, PlivoClientBuilder, PlivoError, PricingService,
    RecordingService,
};
pub use domain::{
    Account, AccountModifyParams, ApiResponse, Application, ApplicationCreated,
    ApplicationParams, AuthId, AuthToken, Call, CallCreated, CallDtmfParams, CallListParams,
    CallMakeParams, CallPlayParams, CallSpeakParams, CallTransferParams, CarrierListParams,
    Conference, ConferenceNames, ConferenceSpeakParams, Endpoint, EndpointCreateParams,
    EndpointCreated, EndpointModifyParams, Envelope, FieldError, IncomingCarrier,
    IncomingCarrierParams, LimitOffset, LiveCall, LiveCalls, Member, Message, MessageCreated,
    MessageSendParams, Meta, Number, NumberAddParams, NumberEditParams, NumberGroup,
    NumberListParams, NumberRentParams, NumberRental, NumberSearchParams, OutgoingCarrier,
    OutgoingCarrierParams, Plan, Pricing, RawResponse, RecordParams, Recording,
    RecordingListParams, RecordingStarted, RentedNumber, RequestUuid, Subaccount,
    SubaccountCreated, ValidationError,
};
pub use transport::Method;
