//! Typed Rust client for the VoIP.ms REST API.
//!
//! The design follows three layers: a domain layer of strong types and
//! static schemas (operation table, DID-order allow-list, vendor error
//! table), a transport layer for wire-format quirks, and a small client
//! layer orchestrating requests.
//!
//! ```rust,no_run
//! use voipms::{Args, Credentials, VoipMsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voipms::VoipMsError> {
//!     let client = VoipMsClient::new(Credentials::new("john@example.com", "secret")?);
//!
//!     // Typed surface over the common flows:
//!     let _balance = client.get_balance(false).await?;
//!
//!     // Or schema-checked dispatch by vendor method name:
//!     let _dids = client
//!         .call("getDIDsInfo", &Args::new().text("did", "5551234567"))
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, VoipMsClient, VoipMsClientBuilder, VoipMsError};
pub use domain::{
    error_message, normalize, ApiPassword, ApiUsername, ArgValue, Args, CdrQuery, Date, Did,
    E911Address, EmailAddress, FaxQuery, FieldKind, FieldSpec, OpSpec, OrderMethod, RawDid,
    Routing, RoutingHeader, SmsQuery, Threshold, ValidationError, Verb, SUCCESS,
};
