//! Consumer credentials

use secrecy::{ExposeSecret, SecretString};

/// Consumer key and secret issued by the FIT2CLOUD console ("Account info")
#[derive(Debug)]
pub struct Credentials {
    consumer_key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub(crate) fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl From<(String, SecretString)> for Credentials {
    fn from((consumer_key, secret): (String, SecretString)) -> Self {
        Self {
            consumer_key,
            secret,
        }
    }
}
