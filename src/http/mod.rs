//! HTTP Protocol.
mod status;
mod version;

pub use status::StatusCode;
pub use version::Version;
