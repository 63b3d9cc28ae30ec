//! API models

mod alert;
mod cluster;
mod deploy;
mod event;
mod metric;
mod script;
mod server;
mod tag;

pub use alert::ClusterRoleAlertLogging;
pub use cluster::{Cluster, ClusterParam, ClusterRole};
pub use deploy::{Application, ApplicationDeployment, ApplicationRepo, ApplicationRevision};
pub use event::{Event, Logging, ViewScriptlog};
pub use metric::{Metric, MetricTop};
pub use script::Script;
pub use server::Server;
pub use tag::Tag;
