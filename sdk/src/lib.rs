//! FIT2CLOUD SDK
//!
//! Client for the FIT2CLOUD cloud-management REST API: clusters, servers,
//! scripts, events, tags, application deployments, metrics and alerts.
//!
//! Every call builds one request, signs it with two-legged OAuth 1.0a,
//! sends it and maps the answer: a `200` is decoded into the declared type,
//! any other status becomes [`SdkError::Api`] carrying the raw body.
//!
//! # Example
//!
//! ```no_run
//! use fit2cloud_sdk::{Fit2CloudClient, ServerQuery};
//!
//! # async fn example() -> fit2cloud_sdk::Result<()> {
//! let client = Fit2CloudClient::new("consumer-key", "secret", "https://console.fit2cloud.com/rest/")?;
//!
//! for cluster in client.get_clusters().await? {
//!     let query = ServerQuery::new().cluster(cluster.id.unwrap_or_default());
//!     let servers = client.get_servers(&query).await?;
//!     println!("{:?}: {} servers", cluster.name, servers.len());
//! }
//!
//! let event_id = client.execute_script(42, "uptime").await?;
//! for line in client.get_loggings_by_event_id(event_id).await? {
//!     println!("{}", line.text.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod authn;
pub mod errors;
pub mod http;
pub mod logs;
pub mod options;
pub mod utils;

pub use authn::{Credentials, OAuth1Signer, RequestSigner, SigningRequest};
pub use errors::{Result, SdkError};
pub use crate::http::{
    AlertQuery, Fit2CloudClient, LoggingQuery, NewDeployment, NewRevision, ServerQuery, TagQuery,
    TagServerQuery,
};
pub use options::ClientOptions;

pub use fit2cloud_models as models;
