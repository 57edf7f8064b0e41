pub mod client;
pub mod error;
pub mod types;

pub use client::{DirectoryClient, DirectorySource};
pub use error::NetworkError;
pub use types::{DirectoryResponse, SchoolEntry};
