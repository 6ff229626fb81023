use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded result of one `sms/send` call.
///
/// On success the service lists message ids on the lines after the status
/// code, one per recipient, in the order recipients were given.
pub struct SendOutcome {
    pub status_code: StatusCode,
    pub sms_ids: Vec<String>,
    pub raw_body: String,
}

impl SendOutcome {
    /// Whether the service accepted the message (status code 100).
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}
