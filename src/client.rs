//! High-level client: `MetaplexStorageClient` with nested sub-client accessors.
//!
//! Sub-clients live next to their domain (`auth/client.rs`, `nft/client.rs`).
//! This module keeps the builder and accessor methods. The client holds no
//! per-request state, so one instance can serve concurrent calls.

use crate::auth::client::Auth;
use crate::car::CarEncoder;
use crate::error::SdkError;
use crate::http::NftStorageHttp;
use crate::network::{API_URL_ENV, AUTH_ENDPOINT_ENV, DEFAULT_API_URL, DEFAULT_AUTH_ENDPOINT};
use crate::nft::client::Nfts;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::nft::client::Nfts as NftsClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors: `client.nfts()`, `client.auth()`.
pub struct MetaplexStorageClient<E> {
    pub(crate) http: NftStorageHttp,
    pub(crate) encoder: E,
}

impl<E: CarEncoder> MetaplexStorageClient<E> {
    pub fn builder(encoder: E) -> MetaplexStorageClientBuilder<E> {
        MetaplexStorageClientBuilder::new(encoder)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn nfts(&self) -> Nfts<'_, E> {
        Nfts { client: self }
    }

    pub fn auth(&self) -> Auth<'_, E> {
        Auth { client: self }
    }

    pub fn http(&self) -> &NftStorageHttp {
        &self.http
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }
}

impl<E: Clone> Clone for MetaplexStorageClient<E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            encoder: self.encoder.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MetaplexStorageClientBuilder<E> {
    encoder: E,
    auth_endpoint: String,
    api_url: String,
    timeout: Option<Duration>,
}

impl<E: CarEncoder> MetaplexStorageClientBuilder<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    /// Apply `METAPLEX_AUTH_ENDPOINT` / `NFT_STORAGE_API_URL` when set.
    pub fn from_env(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(AUTH_ENDPOINT_ENV) {
            self.auth_endpoint = endpoint;
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            self.api_url = url;
        }
        self
    }

    pub fn auth_endpoint(mut self, url: &str) -> Self {
        self.auth_endpoint = url.to_string();
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    /// Transport timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<MetaplexStorageClient<E>, SdkError> {
        Ok(MetaplexStorageClient {
            http: NftStorageHttp::with_timeout(&self.auth_endpoint, &self.api_url, self.timeout)?,
            encoder: self.encoder,
        })
    }
}
