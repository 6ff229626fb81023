use crate::domain::{
    ApiId, MessageText, Recipient, SendOutcome, SendSms, SenderId, StatusCode, UnixTimestamp,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response status line is not a number: {line:?}")]
    NonNumericStatus { line: String },

    #[error("response body is empty")]
    EmptyBody,
}

/// Encode the `sms/send` query parameters in their canonical order.
///
/// Order is fixed so that request construction is reproducible:
/// `api_id`, `to`, `text`, then `from`, `time`, `test`, `translit` when set.
/// Percent-encoding is left to the HTTP layer's query serializer.
pub fn encode_send_query(api_id: &ApiId, request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((ApiId::FIELD.to_owned(), api_id.as_str().to_owned()));
    params.push((
        Recipient::FIELD.to_owned(),
        request.recipient().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));

    let options = request.options();
    if let Some(from) = options.from.as_ref() {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
    if let Some(time) = options.time {
        params.push((UnixTimestamp::FIELD.to_owned(), time.value().to_string()));
    }
    if options.test {
        params.push(("test".to_owned(), "1".to_owned()));
    }
    if options.translit {
        params.push(("translit".to_owned(), "1".to_owned()));
    }

    params
}

/// Decode a plain-text `sms/send` response body.
///
/// The first line, trimmed, is the integer status code; remaining non-empty
/// lines are message ids (present on success only).
pub fn decode_send_plain_response(body: &str) -> Result<SendOutcome, TransportError> {
    let mut lines = body.lines();
    let first = lines.next().ok_or(TransportError::EmptyBody)?;

    let trimmed = first.trim();
    if trimmed.is_empty() {
        return Err(TransportError::EmptyBody);
    }

    let code: i32 = trimmed
        .parse()
        .map_err(|_| TransportError::NonNumericStatus {
            line: first.to_owned(),
        })?;

    let sms_ids = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(SendOutcome {
        status_code: StatusCode::new(code),
        sms_ids,
        raw_body: body.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, Recipient, SendOptions, SendSms, SenderId, UnixTimestamp};

    use super::*;

    fn request(options: SendOptions) -> SendSms {
        SendSms::new(
            Recipient::new("+79251234567").unwrap(),
            MessageText::new("hello world").unwrap(),
            options,
        )
    }

    #[test]
    fn encode_required_params_only() {
        let api_id = ApiId::new("test_key").unwrap();
        let params = encode_send_query(&api_id, &request(SendOptions::default()));

        assert_eq!(
            params,
            vec![
                ("api_id".to_owned(), "test_key".to_owned()),
                ("to".to_owned(), "+79251234567".to_owned()),
                ("text".to_owned(), "hello world".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_all_options_in_stable_order() {
        let api_id = ApiId::new("test_key").unwrap();
        let options = SendOptions {
            from: Some(SenderId::new("acme").unwrap()),
            time: Some(UnixTimestamp::new(1_700_000_000)),
            translit: true,
            test: true,
        };
        let params = encode_send_query(&api_id, &request(options));

        assert_eq!(
            params,
            vec![
                ("api_id".to_owned(), "test_key".to_owned()),
                ("to".to_owned(), "+79251234567".to_owned()),
                ("text".to_owned(), "hello world".to_owned()),
                ("from".to_owned(), "acme".to_owned()),
                ("time".to_owned(), "1700000000".to_owned()),
                ("test".to_owned(), "1".to_owned()),
                ("translit".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_test_param_follows_test_flag() {
        let api_id = ApiId::new("test_key").unwrap();

        let with_test = encode_send_query(
            &api_id,
            &request(SendOptions {
                test: true,
                ..Default::default()
            }),
        );
        assert!(with_test.iter().any(|(k, v)| k == "test" && v == "1"));

        let without_test = encode_send_query(&api_id, &request(SendOptions::default()));
        assert!(!without_test.iter().any(|(k, _)| k == "test"));
    }

    #[test]
    fn decode_success_body_with_ids() {
        let outcome = decode_send_plain_response("100\nABC123\n").unwrap();
        assert_eq!(outcome.status_code, StatusCode::new(100));
        assert!(outcome.is_success());
        assert_eq!(outcome.sms_ids, vec!["ABC123".to_owned()]);
        assert_eq!(outcome.raw_body, "100\nABC123\n");
    }

    #[test]
    fn decode_bare_error_code() {
        let outcome = decode_send_plain_response("202").unwrap();
        assert_eq!(outcome.status_code, StatusCode::new(202));
        assert!(outcome.sms_ids.is_empty());
    }

    #[test]
    fn decode_trims_status_line() {
        let outcome = decode_send_plain_response(" 100 \r\nABC123\r\n").unwrap();
        assert_eq!(outcome.status_code, StatusCode::new(100));
        assert_eq!(outcome.sms_ids, vec!["ABC123".to_owned()]);
    }

    #[test]
    fn decode_rejects_non_numeric_status() {
        let err = decode_send_plain_response("abc").unwrap_err();
        assert!(matches!(
            err,
            TransportError::NonNumericStatus { ref line } if line == "abc"
        ));
    }

    #[test]
    fn decode_rejects_empty_body() {
        assert!(matches!(
            decode_send_plain_response(""),
            Err(TransportError::EmptyBody)
        ));
        assert!(matches!(
            decode_send_plain_response("  \n"),
            Err(TransportError::EmptyBody)
        ));
    }
}
