//! HTTP client layer: `NftStorageHttp` for token exchange and CAR uploads.

pub mod client;

pub use client::NftStorageHttp;
