mod config;
mod feed;
mod http;
mod pull;
mod resolve;
mod store;

pub use config::{OUT_PATH, TOPIC_RSS};
pub use pull::run;
pub use store::Outcome;
