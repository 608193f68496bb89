//! Domain layer: strong types, static schemas, and validation (no I/O).

pub mod order;
pub mod schema;
pub mod status;

mod request;
mod validation;
mod value;

pub use order::{normalize, OrderMethod};
pub use request::{CdrQuery, E911Address, FaxQuery, SmsQuery};
pub use schema::{ArgValue, Args, FieldKind, FieldSpec, OpSpec, Verb};
pub use status::{error_message, SUCCESS};
pub use validation::ValidationError;
pub use value::{
    ApiPassword, ApiUsername, Date, Did, EmailAddress, RawDid, Routing, RoutingHeader, Threshold,
};
