//! FIT2CLOUD REST API client

pub mod alerts;
pub mod client;
pub mod clusters;
pub mod deployments;
pub mod events;
pub mod metrics;
pub(crate) mod params;
pub mod scripts;
pub mod servers;
pub mod tags;

pub use alerts::AlertQuery;
pub use client::Fit2CloudClient;
pub use deployments::{NewDeployment, NewRevision};
pub use events::LoggingQuery;
pub use servers::ServerQuery;
pub use tags::{TagQuery, TagServerQuery};
