//! FIT2CLOUD API models
//!
//! Plain records deserialized from the JSON bodies returned by the
//! FIT2CLOUD REST API. Every field is optional: the API omits whatever
//! does not apply to a given resource.

pub mod models;

pub use models::*;
