//! Core domain types and traits for the DeployBot API client.
//!
//! This crate contains:
//! - Account credentials and the derived API base URL
//! - Resource identifiers and pagination requests
//! - Parameter cleansing for query strings and request bodies
//! - Deployment trigger options
//! - The error taxonomy and the status-message table
//! - The transport trait and the request/response values crossing it

pub mod credentials;
pub mod deployment;
pub mod error;
pub mod id;
pub mod page;
pub mod params;
pub mod request;
pub mod status;
pub mod transport;

pub use credentials::{ApiToken, Credentials};
pub use deployment::DeploymentOptions;
pub use error::{Error, Result};
pub use id::ResourceId;
pub use page::PageRequest;
pub use params::Params;
pub use request::{ApiRequest, HttpMethod};
pub use status::status_message;
pub use transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportErrorKind};
