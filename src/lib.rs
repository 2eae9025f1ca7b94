//! # Metaplex Storage SDK
//!
//! Packages Metaplex NFT metadata and assets into content-addressed archives (CARs)
//! and authorizes their upload to NFT.Storage with a Solana key.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Metadata types, link rewriting, CAR packaging (always available, WASM-safe)
//! 2. **Auth**: Signed put-request construction + platform-dependent signing
//! 3. **HTTP API**: `NftStorageHttp` for token exchange and CAR upload
//! 4. **High-Level Client**: `MetaplexStorageClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use metaplex_storage_sdk::prelude::*;
//!
//! let client = MetaplexStorageClient::builder(my_car_encoder).from_env().build()?;
//! let auth = AuthContext::from_keypair(keypair, SolanaCluster::Devnet);
//!
//! let nft = client
//!     .nfts()
//!     .prepare(metadata_json, File::new("cat.png", png_bytes), vec![])
//!     .await?;
//! let stored = client.nfts().store_prepared(&auth, &nft).await?;
//! println!("metadata: {}", stored.metadata_uri);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all modules.
pub mod shared;

/// Metaplex metadata schema, validation, link helpers and rewriting.
pub mod metadata;

/// CAR encoder seam and in-memory files.
pub mod car;

/// NFT packaging: asset CAR + metadata CAR.
pub mod nft;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Upload authorization: signed put requests, `did:key` derivation, signers.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the auth service and NFT.Storage.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MetaplexStorageClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Chain, RootCid, SolanaCluster};

    // Metadata
    pub use crate::metadata::{
        ensure_valid_metadata, make_gateway_url, make_ipfs_uri,
        replace_file_refs_with_ipfs_links, Attribute, Collection, Creator, FileDescription,
        MetaplexMetadata, Properties,
    };

    // Packaging
    pub use crate::car::{CarEncoder, EncodedCar, File};
    pub use crate::nft::{prepare_metaplex_nft, PackagedNft};

    // Errors
    pub use crate::error::{AuthError, BoxError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_AUTH_ENDPOINT, GATEWAY_HOST};

    // Auth
    pub use crate::auth::{
        build_auth_request, key_did, AuthContext, AuthRequest, RequestContext, Signer,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::auth::client::get_upload_token;
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, MetaplexStorageClient, MetaplexStorageClientBuilder, NftsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::NftStorageHttp;
    #[cfg(feature = "http")]
    pub use crate::nft::client::StoredNft;
}
