//! OAuth 1.0a request signing
//!
//! The API authenticates every call with two-legged OAuth 1.0a: the
//! consumer key/secret pair signs the request and no access token is used.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use http::Method;
use sha1::Sha1;
use url::Url;

use crate::authn::credentials::Credentials;
use crate::errors::{Result, SdkError};

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// The parts of an outgoing request covered by the signature
#[derive(Debug, Clone)]
pub struct SigningRequest<'a> {
    pub method: &'a Method,
    /// Target URL without query string
    pub url: &'a str,
    /// Decoded query and form parameters
    pub params: Vec<(&'a str, &'a str)>,
}

/// Produces the `Authorization` header for a request.
///
/// Implementations hold only immutable state so one signer can be shared by
/// every call made through a client.
pub trait RequestSigner: Send + Sync {
    fn authorization(&self, request: &SigningRequest<'_>) -> Result<String>;
}

/// Two-legged OAuth 1.0a signer using HMAC-SHA1
#[derive(Debug)]
pub struct OAuth1Signer {
    credentials: Credentials,
}

impl OAuth1Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn consumer_key(&self) -> &str {
        self.credentials.consumer_key()
    }

    /// Sign with a fixed nonce and timestamp
    pub fn sign_with(
        &self,
        request: &SigningRequest<'_>,
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.consumer_key()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base = signature_base_string(request, &oauth_params)?;
        let signature = self.signature(&base)?;

        let mut header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>();
        header.insert(
            2,
            format!("oauth_signature=\"{}\"", percent_encode(&signature)),
        );

        Ok(format!("OAuth {}", header.join(", ")))
    }

    fn signature(&self, base: &str) -> Result<String> {
        // No token, so the token secret half of the key is empty
        let key = format!("{}&", percent_encode(self.credentials.secret()));
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| SdkError::Signing(e.to_string()))?;
        mac.update(base.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl RequestSigner for OAuth1Signer {
    fn authorization(&self, request: &SigningRequest<'_>) -> Result<String> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        self.sign_with(request, &nonce, Utc::now().timestamp())
    }
}

/// RFC 3986 encoding as required by OAuth: only unreserved characters pass
fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Scheme and host lowercased, default port dropped, no query or fragment
fn base_string_uri(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|e| SdkError::Signing(format!("{}: {}", raw, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| SdkError::Signing(format!("URL has no host: {}", raw)))?;

    let mut uri = format!("{}://{}", url.scheme(), host.to_ascii_lowercase());
    if let Some(port) = url.port() {
        uri.push_str(&format!(":{}", port));
    }
    uri.push_str(url.path());
    Ok(uri)
}

fn signature_base_string(
    request: &SigningRequest<'_>,
    oauth_params: &[(&str, &str)],
) -> Result<String> {
    let mut encoded: Vec<(String, String)> = request
        .params
        .iter()
        .chain(oauth_params.iter())
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        request.method.as_str().to_ascii_uppercase(),
        percent_encode(&base_string_uri(request.url)?),
        percent_encode(&normalized)
    ))
}
