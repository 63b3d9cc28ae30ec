//! HTTP client implementation

use std::fmt;
use std::sync::Arc;

use http::{header, Method, StatusCode};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::authn::{Credentials, OAuth1Signer, RequestSigner, SigningRequest};
use crate::errors::{Result, SdkError};
use crate::http::params::Params;
use crate::options::ClientOptions;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Client for the FIT2CLOUD REST API.
///
/// Holds the endpoint and an immutable signer; every call is one signed
/// request and one response, so a single client can be shared freely
/// (e.g. behind an `Arc`) between tasks.
pub struct Fit2CloudClient {
    client: Client,
    endpoint: String,
    execute_script_url: String,
    logging_url: String,
    signer: Arc<dyn RequestSigner>,
}

impl fmt::Debug for Fit2CloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fit2CloudClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// A request before signing
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    /// Absolute URL without query string
    url: String,
    query: Params,
    form: Params,
}

impl ApiRequest {
    pub(crate) fn get(url: String) -> Self {
        Self {
            method: Method::GET,
            url,
            query: Params::new(),
            form: Params::new(),
        }
    }

    pub(crate) fn post(url: String) -> Self {
        Self {
            method: Method::POST,
            ..Self::get(url)
        }
    }

    pub(crate) fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn form(mut self, form: Params) -> Self {
        self.form = form;
        self
    }

    fn full_url(&self) -> String {
        if self.query.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.query.to_query())
        }
    }
}

impl Fit2CloudClient {
    /// Create a client from the consumer key, secret and API endpoint shown
    /// in the FIT2CLOUD console
    pub fn new(consumer_key: &str, secret: &str, rest_api_url: &str) -> Result<Self> {
        Self::from_options(ClientOptions::new(consumer_key, secret, rest_api_url))
    }

    /// Create a client signing requests with OAuth 1.0a
    pub fn from_options(options: ClientOptions) -> Result<Self> {
        let endpoint = options.endpoint()?;
        let client = build_http_client(&options)?;
        let signer = OAuth1Signer::new(Credentials::from((options.consumer_key, options.secret)));
        Ok(Self::assemble(client, endpoint, Arc::new(signer)))
    }

    /// Create a client with a custom request signer
    pub fn with_signer(options: &ClientOptions, signer: Arc<dyn RequestSigner>) -> Result<Self> {
        let endpoint = options.endpoint()?;
        let client = build_http_client(options)?;
        Ok(Self::assemble(client, endpoint, signer))
    }

    fn assemble(client: Client, endpoint: String, signer: Arc<dyn RequestSigner>) -> Self {
        Self {
            execute_script_url: format!("{}/executescript/server", endpoint),
            logging_url: format!("{}/event/loggings/", endpoint),
            client,
            endpoint,
            signer,
        }
    }

    /// API endpoint, without trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn execute_script_url(&self) -> &str {
        &self.execute_script_url
    }

    pub fn logging_url(&self) -> &str {
        &self.logging_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Sign and send a request, returning the body of a 200 response
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<String> {
        let url = request.full_url();

        let signing = SigningRequest {
            method: &request.method,
            url: &request.url,
            params: request.query.iter().chain(request.form.iter()).collect(),
        };
        let authorization = self.signer.authorization(&signing)?;

        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(header::AUTHORIZATION, authorization);
        if request.method == Method::POST {
            builder = builder
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.form.to_query());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            error!("HTTP {} {} failed: {} - {}", request.method, url, status, body);
            return Err(SdkError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }

    /// Deserialize a JSON body
    pub(crate) async fn json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `true` only when the body is exactly `true`
    pub(crate) async fn boolean(&self, request: ApiRequest) -> Result<bool> {
        let body = self.send(request).await?;
        Ok(body == "true")
    }

    /// Plain-text decimal identifier
    pub(crate) async fn number(&self, request: ApiRequest) -> Result<i64> {
        let body = self.send(request).await?;
        body.trim()
            .parse::<i64>()
            .map_err(|source| SdkError::InvalidNumber { body, source })
    }
}

fn build_http_client(options: &ClientOptions) -> Result<Client> {
    let mut builder = Client::builder().user_agent(options.user_agent.clone());
    if let Some(timeout) = options.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
