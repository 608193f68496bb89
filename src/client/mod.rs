//! Client layer: orchestrates transport calls and maps the vendor's
//! status protocol to typed outcomes.

mod endpoints;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    error_message, normalize, schema, ApiPassword, ApiUsername, Args, ValidationError, Verb,
    SUCCESS,
};
use crate::transport;

const DEFAULT_ENDPOINT: &str = "https://voip.ms/api/v1/rest.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn post_form<'a>(
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
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// API credentials, embedded into every request.
///
/// These are the `api_username`/`api_password` pair enabled in the VoIP.ms
/// customer portal, not the portal login itself.
pub struct Credentials {
    username: ApiUsername,
    password: ApiPassword,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: ApiUsername::new(username)?,
            password: ApiPassword::new(password)?,
        })
    }

    fn username(&self) -> &str {
        self.username.as_str()
    }

    fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VoipMsClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (a non-`success` status found in the error table),
/// - validation/parse failures.
pub enum VoipMsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// VoIP.ms returned an error status with a documented meaning.
    #[error("API error: {status}: {message}")]
    Api {
        status: String,
        message: &'static str,
    },

    /// Response body could not be parsed as the expected envelope.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors or the operation schema rejected a value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`VoipMsClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct VoipMsClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VoipMsClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the rest.php endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`VoipMsClient`].
    pub fn build(self) -> Result<VoipMsClient, VoipMsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VoipMsError::Transport(Box::new(err)))?;

        Ok(VoipMsClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level VoIP.ms client.
///
/// Each call performs exactly one HTTP request against
/// `https://voip.ms/api/v1/rest.php` and returns the parsed JSON body. The
/// client holds only static configuration; it has no session, cache, or
/// retry layer, and it remains usable after an error.
pub struct VoipMsClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl VoipMsClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`VoipMsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> VoipMsClientBuilder {
        VoipMsClientBuilder::new(credentials)
    }

    /// Dispatch an operation by name, validating `args` against the static
    /// operation schema first.
    ///
    /// The schema decides the HTTP verb. Unknown methods, unknown fields,
    /// kind mismatches, and missing required fields are all rejected before
    /// any network traffic.
    pub async fn call(&self, method: &str, args: &Args) -> Result<Option<Value>, VoipMsError> {
        let (spec, params) = schema::build_for(method, args)?;
        match spec.verb {
            Verb::Get => self.get(spec.method, params).await,
            Verb::Post => self.post(spec.method, params).await,
        }
    }

    /// Order or back-order DIDs.
    ///
    /// `method` must name one of the nine ordering operations; anything else
    /// is rejected so an arbitrary string is never forwarded as the API
    /// `method`.
    pub async fn order(&self, method: &str, args: &Args) -> Result<Option<Value>, VoipMsError> {
        let (method, params) = normalize(method, args)?;
        self.post(method, params).await
    }

    /// Low-level GET with pre-encoded parameters.
    ///
    /// Credentials and `method` are appended to the query string; the
    /// response envelope is inspected as described on [`VoipMsClient`].
    /// Prefer [`VoipMsClient::call`] for schema-checked dispatch.
    pub async fn get(
        &self,
        method: &str,
        params: Vec<(String, String)>,
    ) -> Result<Option<Value>, VoipMsError> {
        let query = transport::encode_query(
            self.credentials.username(),
            self.credentials.password(),
            method,
            &params,
        );
        let url = format!("{}?{}", self.endpoint, query);
        debug!(method, verb = "GET", "dispatching VoIP.ms request");

        let response = self
            .http
            .get(&url)
            .await
            .map_err(VoipMsError::Transport)?;
        handle_response(method, response)
    }

    /// Low-level POST with pre-encoded parameters sent as form fields.
    pub async fn post(
        &self,
        method: &str,
        params: Vec<(String, String)>,
    ) -> Result<Option<Value>, VoipMsError> {
        let form = transport::form_params(
            self.credentials.username(),
            self.credentials.password(),
            method,
            &params,
        );
        debug!(method, verb = "POST", "dispatching VoIP.ms request");

        let response = self
            .http
            .post_form(&self.endpoint, form)
            .await
            .map_err(VoipMsError::Transport)?;
        handle_response(method, response)
    }
}

/// Translate one HTTP response into the caller-visible outcome.
///
/// `204 No Content` is a successful empty result. A `status` of `success`
/// returns the body; a status found in the error table raises; a status the
/// table does not know is passed through to the caller as data.
fn handle_response(method: &str, response: HttpResponse) -> Result<Option<Value>, VoipMsError> {
    if response.status == 204 {
        return Ok(None);
    }
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(VoipMsError::HttpStatus {
            status: response.status,
            body,
        });
    }

    let envelope = transport::decode_envelope(&response.body)
        .map_err(|err| VoipMsError::Parse(Box::new(err)))?;

    if envelope.status == SUCCESS {
        return Ok(Some(envelope.into_body()));
    }
    if let Some(message) = error_message(&envelope.status) {
        return Err(VoipMsError::Api {
            status: envelope.status,
            message,
        });
    }

    warn!(
        method,
        status = %envelope.status,
        "unrecognized non-success status passed through"
    );
    Ok(Some(envelope.into_body()))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_verb: Option<&'static str>,
        last_url: Option<String>,
        last_form: Vec<(String, String)>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_verb: None,
                    last_url: None,
                    last_form: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        pub(crate) fn last_request(
            &self,
        ) -> (Option<&'static str>, Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (
                state.last_verb,
                state.last_url.clone(),
                state.last_form.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_verb = Some("GET");
                    state.last_url = Some(url.to_owned());
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }

        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_verb = Some("POST");
                    state.last_url = Some(url.to_owned());
                    state.last_form = params;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    pub(crate) fn make_client(transport: FakeTransport) -> VoipMsClient {
        VoipMsClient {
            credentials: Credentials::new("john@example.com", "secret").unwrap(),
            endpoint: "https://example.invalid/api/v1/rest.php".to_owned(),
            http: Arc::new(transport),
        }
    }

    pub(crate) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    #[tokio::test]
    async fn get_embeds_credentials_and_method_in_the_query() {
        let transport = FakeTransport::new(200, r#"{"status":"success","ip":"127.0.0.1"}"#);
        let client = make_client(transport.clone());

        let body = client.get("getIP", Vec::new()).await.unwrap().unwrap();
        assert_eq!(body["ip"], "127.0.0.1");

        let (verb, url, _) = transport.last_request();
        assert_eq!(verb, Some("GET"));
        let url = url.unwrap();
        assert!(url.starts_with("https://example.invalid/api/v1/rest.php?"));
        assert!(url.contains("api_username=john%40example.com"));
        assert!(url.contains("api_password=secret"));
        assert!(url.contains("method=getIP"));
    }

    #[tokio::test]
    async fn success_status_returns_the_full_body() {
        let json = r#"
        {
          "status": "success",
          "balance": { "current_balance": "25.18" }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport);

        let body = client.get("getBalance", Vec::new()).await.unwrap().unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["balance"]["current_balance"], "25.18");
    }

    #[tokio::test]
    async fn mapped_error_status_raises_with_the_table_message() {
        let transport = FakeTransport::new(200, r#"{"status":"invalid_did"}"#);
        let client = make_client(transport);

        let err = client
            .get("getDIDsInfo", Vec::new())
            .await
            .unwrap_err();
        match err {
            VoipMsError::Api { status, message } => {
                assert_eq!(status, "invalid_did");
                assert_eq!(message, "This is not a valid DID");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unmapped_error_status_is_passed_through_as_data() {
        let transport = FakeTransport::new(200, r#"{"status":"some_unmapped_code","hint":42}"#);
        let client = make_client(transport);

        let body = client
            .get("getDIDsInfo", Vec::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body["status"], "some_unmapped_code");
        assert_eq!(body["hint"], 42);
    }

    #[tokio::test]
    async fn http_204_returns_none_without_parsing() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport);

        let body = client.get("getIP", Vec::new()).await.unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn non_2xx_maps_to_http_status_error() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport);

        let err = client.get("getIP", Vec::new()).await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));

        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);
        let err = client.get("getIP", Vec::new()).await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client.get("getIP", Vec::new()).await.unwrap_err();
        assert!(matches!(err, VoipMsError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_status_field_maps_to_parse_error() {
        let transport = FakeTransport::new(200, r#"{"balance":"25.18"}"#);
        let client = make_client(transport);

        let err = client.get("getBalance", Vec::new()).await.unwrap_err();
        assert!(matches!(err, VoipMsError::Parse(_)));
    }

    #[tokio::test]
    async fn call_dispatches_reads_over_get_and_writes_over_post() {
        let transport = FakeTransport::new(200, r#"{"status":"success"}"#);
        let client = make_client(transport.clone());

        client
            .call("getBalance", &Args::new().flag("advanced", true))
            .await
            .unwrap();
        let (verb, url, _) = transport.last_request();
        assert_eq!(verb, Some("GET"));
        assert!(url.unwrap().contains("advanced=1"));

        client
            .call(
                "sendSMS",
                &Args::new()
                    .text("did", "5551234567")
                    .text("dst", "5559876543")
                    .text("message", "hello"),
            )
            .await
            .unwrap();
        let (verb, _, form) = transport.last_request();
        assert_eq!(verb, Some("POST"));
        assert_param(&form, "api_username", "john@example.com");
        assert_param(&form, "method", "sendSMS");
        assert_param(&form, "message", "hello");
    }

    #[tokio::test]
    async fn call_rejects_unknown_methods_before_any_request() {
        let transport = FakeTransport::new(200, r#"{"status":"success"}"#);
        let client = make_client(transport.clone());

        let err = client.call("stealAllDIDs", &Args::new()).await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::Validation(ValidationError::UnknownMethod { .. })
        ));
        let (verb, _, _) = transport.last_request();
        assert_eq!(verb, None);
    }

    #[tokio::test]
    async fn order_goes_through_the_normalizer() {
        let transport = FakeTransport::new(200, r#"{"status":"success"}"#);
        let client = make_client(transport.clone());

        let args = Args::new()
            .text("did", "5551234567")
            .text("routing", "account:100000")
            .int("pop", 5)
            .int("dialtime", 60)
            .flag("cnam", true)
            .int("billing_type", 1);
        client.order("orderDID", &args).await.unwrap();

        let (verb, _, form) = transport.last_request();
        assert_eq!(verb, Some("POST"));
        assert_param(&form, "method", "orderDID");
        assert_param(&form, "cnam", "1");

        let err = client.order("getBalance", &args).await.unwrap_err();
        assert!(matches!(
            err,
            VoipMsError::Validation(ValidationError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn credentials_constructors_validate_inputs() {
        assert!(Credentials::new("   ", "secret").is_err());
        assert!(Credentials::new("john@example.com", "").is_err());
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let client = VoipMsClient::builder(Credentials::new("john@example.com", "secret").unwrap())
            .endpoint("https://example.invalid/rest.php")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/rest.php");
    }
}
