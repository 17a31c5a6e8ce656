//! Client side of the OData-style remote API
//!
//! - transport.rs: HTTP seam (gloo-net in the browser, fakes in tests)
//! - client.rs: per-collection requests and response decoding
//! - fetcher.rs: table query → `QueryResult`
//! - lookups.rs: secondary fetches for lookup columns
//! - actions.rs: load, submit and delete flows with user notifications

pub mod actions;
pub mod client;
mod error;
pub mod fetcher;
pub mod lookups;
pub mod transport;

#[cfg(test)]
pub mod fake;

pub use client::EntityClient;
pub use error::FetchError;
pub use transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
