//! Transport layer: wire-format details shared by every operation.

mod envelope;
mod query;

pub(crate) use envelope::{decode_envelope, Envelope};
pub use envelope::TransportError;
pub(crate) use query::{encode_query, form_params};
