//! Outbound HTTP for third-party APIs.
//!
//! Everything the resolver sends goes through [`HttpClient`], so tests can
//! substitute [`MockClient`] and assert exactly which URLs were requested.

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};
