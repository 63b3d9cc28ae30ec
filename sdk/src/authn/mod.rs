//! Request authentication

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{OAuth1Signer, RequestSigner, SigningRequest};
