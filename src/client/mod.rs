//! Client layer: performs the single `sms/send` GET and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiId, PartnerId, SendOutcome, SendSms, ValidationError};
use crate::transport::{TransportError, decode_send_plain_response, encode_send_query};

const DEFAULT_SEND_ENDPOINT: &str = "http://sms.ru/sms/send";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Partner identifier appended to every request made by this tool.
pub const PARTNER_ID: &str = "3805";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get_query<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get_query<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClient`].
///
/// A well-formed non-success status code is *not* an error here: the decoded
/// [`SendOutcome`] carries it, and the caller decides how to report it.
pub enum SendError {
    /// HTTP client / transport failure (DNS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body's first line could not be parsed as a status code.
    #[error("bad response: {0}")]
    BadResponse(#[source] TransportError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsClientBuilder {
    api_id: ApiId,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
    partner_id: Option<PartnerId>,
}

impl SmsClientBuilder {
    /// Create a builder with the default endpoint and a 30-second timeout.
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            partner_id: PartnerId::new(PARTNER_ID).ok(),
        }
    }

    /// Override the `sms/send` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override or clear the partner id appended to requests.
    pub fn partner_id(mut self, partner_id: Option<PartnerId>) -> Self {
        self.partner_id = partner_id;
        self
    }

    /// Build an [`SmsClient`].
    pub fn build(self) -> Result<SmsClient, SendError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendError::Transport(Box::new(err)))?;

        Ok(SmsClient {
            api_id: self.api_id,
            endpoint: self.endpoint,
            partner_id: self.partner_id,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the plain-text `sms/send` endpoint.
///
/// Performs exactly one GET per [`SmsClient::send_sms`] call; no retries.
/// The default endpoint is `http://sms.ru/sms/send`.
pub struct SmsClient {
    api_id: ApiId,
    endpoint: String,
    partner_id: Option<PartnerId>,
    http: Arc<dyn HttpTransport>,
}

impl SmsClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`SmsClient::builder`].
    pub fn new(api_id: ApiId) -> Result<Self, SendError> {
        SmsClientBuilder::new(api_id).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_id: ApiId) -> SmsClientBuilder {
        SmsClientBuilder::new(api_id)
    }

    /// Send one SMS message and decode the plain-text response.
    ///
    /// Errors:
    /// - [`SendError::Transport`] on HTTP-layer failures,
    /// - [`SendError::HttpStatus`] on non-2xx responses,
    /// - [`SendError::BadResponse`] when the body's first line is not a number.
    ///
    /// A parseable non-100 status code is returned inside the `Ok` outcome.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendOutcome, SendError> {
        let mut params = encode_send_query(&self.api_id, &request);
        if let Some(partner_id) = self.partner_id.as_ref() {
            params.push((PartnerId::FIELD.to_owned(), partner_id.as_str().to_owned()));
        }

        tracing::debug!(endpoint = %self.endpoint, ?params, "sending sms/send request");

        let response = self
            .http
            .get_query(&self.endpoint, params)
            .await
            .map_err(SendError::Transport)?;

        tracing::debug!(status = response.status, body = %response.body, "service response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SendError::HttpStatus {
                status: response.status,
                body,
            });
        }

        decode_send_plain_response(&response.body).map_err(SendError::BadResponse)
    }
}
