use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU `api_id` token.
///
/// Invariant: non-empty after trimming. No format validation beyond that;
/// the service itself rejects unknown tokens with status code 200.
pub struct ApiId(String);

impl ApiId {
    /// Query parameter name used by SMS.RU (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination phone number as sent to SMS.RU (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize or
/// validate number format; the service reports unroutable numbers itself.
pub struct Recipient(String);

impl Recipient {
    /// Query parameter name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) recipient number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed value as sent to SMS.RU.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`text`).
///
/// Invariant: non-empty after trimming. The original value, including any
/// interior or trailing whitespace, is preserved verbatim.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SMS.RU (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU sender id (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled in your SMS.RU account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by SMS.RU (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`time`), used by SMS.RU for scheduled sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Query parameter name used by SMS.RU (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Partner identifier for SMS.RU (`partner_id`).
///
/// Invariant: non-empty after trimming.
pub struct PartnerId(String);

impl PartnerId {
    /// Query parameter name used by SMS.RU (`partner_id`).
    pub const FIELD: &'static str = "partner_id";

    /// Create a validated [`PartnerId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated partner id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS.RU status code from the first line of a plain-text response.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Code reported by SMS.RU when a message was accepted for delivery.
    pub const SUCCESS: Self = Self(100);

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMS.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` if this code means the message was accepted.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Human-readable description of this code.
    ///
    /// Codes outside the documented table render as
    /// `Undocumented response code: <code>`.
    pub fn describe(self) -> String {
        match self.known() {
            Some(kind) => kind.description().to_owned(),
            None => format!("Undocumented response code: {}", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Status codes documented for the plain-text `sms/send` endpoint.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    MessageAccepted,
    InvalidApiId,
    InsufficientFunds,
    InvalidRecipient,
    EmptyMessageText,
    SenderNotApproved,
    MessageTooLong,
    DailyLimitExceeded,
    NoDeliveryRoute,
    InvalidTime,
    RecipientInStopList,
    UsedGetInsteadOfPost,
    MethodNotFound,
    ServiceTemporarilyUnavailable,
    InvalidToken,
    InvalidAuth,
    AccountNotConfirmed,
}

impl KnownStatusCode {
    /// Convert a raw SMS.RU integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            100 => Self::MessageAccepted,
            200 => Self::InvalidApiId,
            201 => Self::InsufficientFunds,
            202 => Self::InvalidRecipient,
            203 => Self::EmptyMessageText,
            204 => Self::SenderNotApproved,
            205 => Self::MessageTooLong,
            206 => Self::DailyLimitExceeded,
            207 => Self::NoDeliveryRoute,
            208 => Self::InvalidTime,
            209 => Self::RecipientInStopList,
            210 => Self::UsedGetInsteadOfPost,
            211 => Self::MethodNotFound,
            220 => Self::ServiceTemporarilyUnavailable,
            300 => Self::InvalidToken,
            301 => Self::InvalidAuth,
            302 => Self::AccountNotConfirmed,
            _ => return None,
        })
    }

    /// Fixed human-readable description of this status.
    pub fn description(self) -> &'static str {
        match self {
            Self::MessageAccepted => "Message sent successfully",
            Self::InvalidApiId => "Incorrect api_id",
            Self::InsufficientFunds => "Low account balance",
            Self::InvalidRecipient => "Incorrect recipient specified",
            Self::EmptyMessageText => "Message has no text",
            Self::SenderNotApproved => "Sender name not approved",
            Self::MessageTooLong => "Message too long (exceeds 8 SMS)",
            Self::DailyLimitExceeded => "Daily message limit reached",
            Self::NoDeliveryRoute => {
                "Cannot send messages to this number, or more than 100 recipients listed"
            }
            Self::InvalidTime => "Incorrect value of 'time'",
            Self::RecipientInStopList => "Recipient number is in your stop-list",
            Self::UsedGetInsteadOfPost => "Used GET where POST is required",
            Self::MethodNotFound => "Method not found",
            Self::ServiceTemporarilyUnavailable => {
                "Service temporarily unavailable, try again later"
            }
            Self::InvalidToken => "Invalid token (expired, or your IP changed)",
            Self::InvalidAuth => "Wrong password, or user not found",
            Self::AccountNotConfirmed => "Account authorized but not confirmed",
        }
    }
}
