//! CLI surface: argument parsing, input resolution, and the exit-code contract.

use std::io::{self, Read};

use clap::Parser;

use crate::client::{SendError, SmsClient};
use crate::config::{self, ConfigError};
use crate::domain::{
    ApiId, MessageText, Recipient, SendOptions, SendSms, SenderId, StatusCode, UnixTimestamp,
    ValidationError,
};

/// The service reported a non-success status code, or its response was
/// unparseable.
pub const EXIT_SERVICE_ERROR: i32 = 1;
/// The HTTP call itself failed (DNS, connection, timeout, non-2xx status).
pub const EXIT_TRANSPORT: i32 = 2;
/// Local configuration or usage error (home dir, dotfiles, missing input).
pub const EXIT_USAGE: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "smssend", version)]
#[command(about = "Send an SMS message from the command line through the SMS.RU service.")]
#[command(after_help = "\
Exit codes:
    0 - message sent successfully
    1 - service returned an error code
    2 - HTTP error
    3 - configuration or usage error

When --api-id or --to are omitted they are read from ~/.smssendrc and
~/.mynumber respectively.

Example:
    echo \"Hello world\" | smssend --api-id=yourapiid --to=phonenumber")]
pub struct Cli {
    /// API id (falls back to ~/.smssendrc)
    #[arg(long = "api-id", value_name = "VALUE")]
    pub api_id: Option<String>,

    /// Telephone number to send the message to (falls back to ~/.mynumber)
    #[arg(long, value_name = "PHONENUMBER")]
    pub to: Option<String>,

    /// Message to be sent (by default read from stdin)
    #[arg(long, value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Sender name (must be enabled in your SMS.RU account)
    #[arg(long, value_name = "VALUE")]
    pub from: Option<String>,

    /// Scheduled send time as a plain unix timestamp in seconds
    #[arg(long, value_name = "UNIXTIME")]
    pub time: Option<u64>,

    /// Ask the server to convert the message to latin characters
    #[arg(long)]
    pub translit: bool,

    /// Print diagnostics and simulate the send (test=1, free of charge)
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, thiserror::Error)]
/// Terminal failures of one `smssend` invocation.
///
/// Every variant maps to exactly one process exit code via
/// [`CliError::exit_code`]; there is no recovery or retry.
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MissingInput(#[from] ValidationError),

    #[error("failed to read the message from stdin: {source}")]
    Stdin {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Send(#[from] SendError),

    #[error("{}", .code.describe())]
    Service { code: StatusCode },
}

impl CliError {
    /// Map this failure to the documented process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::MissingInput(_) | Self::Stdin { .. } => EXIT_USAGE,
            Self::Send(SendError::Validation(_)) => EXIT_USAGE,
            Self::Send(SendError::BadResponse(_)) => EXIT_SERVICE_ERROR,
            Self::Send(_) => EXIT_TRANSPORT,
            Self::Service { .. } => EXIT_SERVICE_ERROR,
        }
    }
}

/// Resolve the message text: the flag verbatim, or stdin read to EOF.
///
/// The prompt goes to stderr so piped input keeps stdout clean.
pub fn resolve_message(flag: Option<String>) -> Result<String, CliError> {
    match flag {
        Some(text) => Ok(text),
        None => {
            eprintln!("Type in the message, then press Ctrl-D to send it");
            read_message(io::stdin().lock())
        }
    }
}

/// Read the entire stream as the message, newlines included.
pub fn read_message(mut reader: impl Read) -> Result<String, CliError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::Stdin { source })?;
    Ok(text)
}

/// Build the send options from parsed flags.
///
/// `--debug` requests the service's simulate mode in addition to verbose
/// diagnostics; the network call itself is never suppressed.
pub fn build_options(cli: &Cli) -> Result<SendOptions, ValidationError> {
    Ok(SendOptions {
        from: cli.from.clone().map(SenderId::new).transpose()?,
        time: cli.time.map(UnixTimestamp::new),
        translit: cli.translit,
        test: cli.debug,
    })
}

/// The whole pipeline: resolve inputs, perform the single GET, report.
///
/// Success prints the status description to stdout and returns `Ok`; every
/// failure path returns a [`CliError`] carrying its exit code.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let options = build_options(&cli)?;
    let api_id = ApiId::new(config::resolve_api_id(cli.api_id)?)?;
    let recipient = Recipient::new(config::resolve_recipient(cli.to)?)?;
    let text = MessageText::new(resolve_message(cli.message)?)?;

    let request = SendSms::new(recipient, text, options);
    let client = SmsClient::new(api_id)?;
    let outcome = client.send_sms(request).await?;

    if outcome.is_success() {
        if !outcome.sms_ids.is_empty() {
            tracing::debug!(ids = ?outcome.sms_ids, "message ids returned by the service");
        }
        println!("{}", outcome.status_code.describe());
        Ok(())
    } else {
        Err(CliError::Service {
            code: outcome.status_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::transport::TransportError;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("smssend").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn message_flag_is_used_verbatim() {
        let resolved = resolve_message(Some("hello  \n".to_owned())).unwrap();
        assert_eq!(resolved, "hello  \n");
    }

    #[test]
    fn stdin_message_is_read_to_eof_without_trimming() {
        let resolved = read_message(Cursor::new("hello\n")).unwrap();
        assert_eq!(resolved, "hello\n");

        let resolved = read_message(Cursor::new("line one\nline two\n")).unwrap();
        assert_eq!(resolved, "line one\nline two\n");
    }

    #[test]
    fn debug_flag_requests_simulate_mode() {
        let options = build_options(&parse(&["--debug"])).unwrap();
        assert!(options.test);

        let options = build_options(&parse(&[])).unwrap();
        assert!(!options.test);
    }

    #[test]
    fn flags_map_to_options() {
        let cli = parse(&[
            "--from",
            "acme",
            "--time",
            "1700000000",
            "--translit",
        ]);
        let options = build_options(&cli).unwrap();
        assert_eq!(options.from.unwrap().as_str(), "acme");
        assert_eq!(options.time.unwrap().value(), 1_700_000_000);
        assert!(options.translit);
        assert!(!options.test);
    }

    #[test]
    fn empty_sender_name_is_rejected() {
        let cli = parse(&["--from", " "]);
        assert!(build_options(&cli).is_err());
    }

    #[test]
    fn time_must_be_a_plain_unix_integer() {
        assert!(Cli::try_parse_from(["smssend", "--time", "1700000000"]).is_ok());
        assert!(Cli::try_parse_from(["smssend", "--time", "12:30"]).is_err());
        assert!(Cli::try_parse_from(["smssend", "--time", "tomorrow"]).is_err());
    }

    #[test]
    fn exit_codes_follow_the_contract() {
        let err = CliError::Config(ConfigError::HomeUnavailable { var: "HOME" });
        assert_eq!(err.exit_code(), EXIT_USAGE);

        let err = CliError::MissingInput(ValidationError::Empty { field: "text" });
        assert_eq!(err.exit_code(), EXIT_USAGE);

        let err = CliError::Stdin {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        };
        assert_eq!(err.exit_code(), EXIT_USAGE);

        let err = CliError::Send(SendError::Transport(Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))));
        assert_eq!(err.exit_code(), EXIT_TRANSPORT);

        let err = CliError::Send(SendError::HttpStatus {
            status: 500,
            body: None,
        });
        assert_eq!(err.exit_code(), EXIT_TRANSPORT);

        let err = CliError::Send(SendError::BadResponse(TransportError::NonNumericStatus {
            line: "abc".to_owned(),
        }));
        assert_eq!(err.exit_code(), EXIT_SERVICE_ERROR);

        let err = CliError::Service {
            code: StatusCode::new(202),
        };
        assert_eq!(err.exit_code(), EXIT_SERVICE_ERROR);
    }

    #[test]
    fn service_error_renders_the_mapped_description() {
        let err = CliError::Service {
            code: StatusCode::new(202),
        };
        assert_eq!(err.to_string(), "Incorrect recipient specified");

        let err = CliError::Service {
            code: StatusCode::new(999),
        };
        assert_eq!(err.to_string(), "Undocumented response code: 999");
    }
}
