//! Async client for the DeployBot REST API.
//!
//! One method per DeployBot operation, all funnelled through a single request
//! executor that builds the URL, attaches the `X-Api-Token` header, sends the
//! request over a [`Transport`] and maps the response:
//!
//! - `200` decodes to a [`serde_json::Value`] returned as-is
//! - any other status becomes [`Error::Api`] with the status-table message
//! - an unreachable server becomes [`Error::Transport`]

pub mod client;
mod deployments;
mod environments;
mod repositories;
mod servers;
pub mod transport;
mod users;

#[cfg(test)]
mod testing;

pub use client::{ClientConfig, DEFAULT_USER_AGENT, DeployBotClient};
pub use deploybot_core::{
    Credentials, DeploymentOptions, Error, PageRequest, ResourceId, Result, Transport,
    TransportError,
};
pub use transport::ReqwestTransport;
