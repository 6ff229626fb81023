//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendOptions, SendSms};
pub use response::SendOutcome;
pub use validation::ValidationError;
pub use value::{
    ApiId, KnownStatusCode, MessageText, PartnerId, Recipient, SenderId, StatusCode, UnixTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_id_rejects_empty() {
        assert!(matches!(
            ApiId::new("   "),
            Err(ValidationError::Empty {
                field: ApiId::FIELD
            })
        ));
    }

    #[test]
    fn recipient_rejects_empty() {
        assert!(matches!(
            Recipient::new(""),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        ));
    }

    #[test]
    fn message_text_preserves_whitespace() {
        let msg = MessageText::new("hello\n").unwrap();
        assert_eq!(msg.as_str(), "hello\n");
    }

    #[test]
    fn send_sms_exposes_its_parts() {
        let req = SendSms::new(
            Recipient::new("+79251234567").unwrap(),
            MessageText::new("hi").unwrap(),
            SendOptions {
                test: true,
                ..Default::default()
            },
        );
        assert_eq!(req.recipient().as_str(), "+79251234567");
        assert_eq!(req.text().as_str(), "hi");
        assert!(req.options().test);
        assert!(!req.options().translit);
    }

    #[test]
    fn outcome_success_follows_status_code() {
        let ok = SendOutcome {
            status_code: StatusCode::new(100),
            sms_ids: vec!["ABC123".to_owned()],
            raw_body: "100\nABC123\n".to_owned(),
        };
        assert!(ok.is_success());

        let err = SendOutcome {
            status_code: StatusCode::new(201),
            sms_ids: Vec::new(),
            raw_body: "201".to_owned(),
        };
        assert!(!err.is_success());
    }
}
