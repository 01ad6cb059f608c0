pub mod agents;
pub mod client;
pub mod error;
pub mod node;

pub use client::{IdentityPolicy, ServiceEndpoint, TorServiceClient};
pub use error::{FetchError, Result};
pub use node::LinkNode;
