use crate::domain::value::{MessageText, Recipient, SenderId, UnixTimestamp};

#[derive(Debug, Clone, Default)]
/// Optional knobs for a single send.
///
/// `test` maps to the service's simulate mode (`test=1`): the request is
/// accepted and validated but nothing is billed or delivered.
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub time: Option<UnixTimestamp>,
    pub translit: bool,
    pub test: bool,
}

#[derive(Debug, Clone)]
/// A fully resolved outbound message: one recipient, one body.
///
/// Constructing this type is the dispatch gate; every field has already
/// passed its non-emptiness validation, so a request that exists can be sent.
pub struct SendSms {
    recipient: Recipient,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn new(recipient: Recipient, text: MessageText, options: SendOptions) -> Self {
        Self {
            recipient,
            text,
            options,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
