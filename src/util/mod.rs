//! Shared utilities and collaborator seams

pub mod os;
pub mod store;
pub mod transport;

pub use store::{ConfigStore, StoreError};
pub use transport::{HttpTransport, Transport, TransportError};
