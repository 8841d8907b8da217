pub mod client;
pub mod error;

pub use client::StorefrontClient;
pub use error::ClientError;
