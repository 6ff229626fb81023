//! Transport layer: wire-format details of the plain-text `sms/send` call.

mod send_sms;

pub use send_sms::{TransportError, decode_send_plain_response, encode_send_query};
