//! Send SMS messages from the command line through the SMS.RU HTTP API.
//!
//! The crate is split the same way the binary's control flow runs: a domain
//! layer of strong types, a transport layer for the plain-text wire format,
//! a client layer performing the single GET, a config layer resolving dotfile
//! fallbacks, and the CLI layer tying them to flags and exit codes.
//!
//! ```rust,no_run
//! use smssend::{ApiId, MessageText, Recipient, SendOptions, SendSms, SmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smssend::SendError> {
//!     let client = SmsClient::new(ApiId::new("...")?)?;
//!     let request = SendSms::new(
//!         Recipient::new("+79251234567")?,
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     );
//!     let outcome = client.send_sms(request).await?;
//!     println!("{}", outcome.status_code.describe());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{PARTNER_ID, SendError, SmsClient, SmsClientBuilder};
pub use transport::TransportError;
pub use domain::{
    ApiId, KnownStatusCode, MessageText, PartnerId, Recipient, SendOptions, SendOutcome, SendSms,
    SenderId, StatusCode, UnixTimestamp, ValidationError,
};
