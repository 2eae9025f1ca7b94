//! Network URL constants for the Metaplex storage SDK.

/// HTTP gateway host used for `https://<host>/ipfs/<cid>/<path>` links.
pub const GATEWAY_HOST: &str = "https://dweb.link";

/// Default endpoint of the Metaplex upload-authorization service.
pub const DEFAULT_AUTH_ENDPOINT: &str =
    "https://us-central1-metaplex-web3storage-dev.cloudfunctions.net/metaplex-auth-dev";

/// Default NFT.Storage API base URL (CAR uploads).
pub const DEFAULT_API_URL: &str = "https://api.nft.storage";

/// Environment variable overriding [`DEFAULT_AUTH_ENDPOINT`].
pub const AUTH_ENDPOINT_ENV: &str = "METAPLEX_AUTH_ENDPOINT";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "NFT_STORAGE_API_URL";
