//! Clients for the services the site backend depends on.
//!
//! - [`github`]: latest-release lookups against the GitHub REST API.
//! - [`tierlist`]: the stats provider feeding the tierlist widget.
//!
//! Every lookup is a single request: no retries, no caching. Timeouts are
//! left to the underlying [`reqwest::Client`].

pub mod error;
pub mod github;
pub mod tierlist;

pub use error::FetchError;
