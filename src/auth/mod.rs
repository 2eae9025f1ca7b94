//! Upload authorization: signed request construction for the Metaplex auth service.
//!
//! ## Protocol
//!
//! The auth service exchanges a signed "put" request for an NFT.Storage upload
//! token scoped to one CAR root. The request carries:
//!
//! - body: compact JSON `{"put":{"rootCID":..,"tags":{"chain":..,"solana-cluster":..}}}`
//! - `X-Metaplex-Mint-PubKey`: `did:key:` identifier of the minting key
//! - `X-Metaplex-Mint-Signature`: base58btc multibase signature over
//!   `"metaplex-pl-dotstorage-auth:" || body`
//!
//! The service re-applies the prefix before verifying, so the body and the
//! prefix must match byte for byte.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "native-auth")]
pub mod native;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::error::{AuthError, BoxError, SdkError};
use crate::shared::{Chain, RootCid, SolanaCluster};

pub const HEADER_MINT_KEY: &str = "X-Metaplex-Mint-PubKey";
pub const HEADER_SIGNATURE: &str = "X-Metaplex-Mint-Signature";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prepended to every message before signing.
pub const SIGNING_DOMAIN_PREFIX: &[u8] = b"metaplex-pl-dotstorage-auth:";

/// Unsigned varint encoding of the `ed25519-pub` multicodec (0xed).
pub const MULTICODEC_ED25519_PUBKEY: [u8; 2] = [0xed, 0x01];

/// Multibase prefix for base58btc.
const MULTIBASE_BASE58BTC: char = 'z';

// ============================================================================
// Signer
// ============================================================================

/// A wallet capable of signing arbitrary messages with the minting key.
///
/// Signing may require user interaction (browser wallet, hardware device);
/// failures are surfaced as-is and never retried.
#[async_trait]
pub trait Signer: Send + Sync {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, BoxError>;
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Box<S> {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, BoxError> {
        (**self).sign_message(message).await
    }
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Arc<S> {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, BoxError> {
        (**self).sign_message(message).await
    }
}

// ============================================================================
// Auth context
// ============================================================================

/// Everything needed to authorize uploads on behalf of one minting key.
pub struct AuthContext<S> {
    pub chain: Chain,
    pub solana_cluster: SolanaCluster,
    pub signer: S,
    pub pubkey: Pubkey,
}

impl<S: Signer> AuthContext<S> {
    pub fn new(solana_cluster: SolanaCluster, signer: S, pubkey: Pubkey) -> Self {
        Self {
            chain: Chain::Solana,
            solana_cluster,
            signer,
            pubkey,
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Tags bound into the signed message. Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTags {
    pub chain: Chain,
    #[serde(rename = "solana-cluster")]
    pub solana_cluster: SolanaCluster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutCarRequest {
    #[serde(rename = "rootCID")]
    pub root_cid: RootCid,
    pub tags: RequestTags,
}

/// The message signed by the minting key and sent as the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<PutCarRequest>,
}

impl RequestMessage {
    pub fn put_car(root_cid: RootCid, chain: Chain, solana_cluster: SolanaCluster) -> Self {
        Self {
            put: Some(PutCarRequest {
                root_cid,
                tags: RequestTags {
                    chain,
                    solana_cluster,
                },
            }),
        }
    }
}

/// Per-request signing state. Built for one call and dropped with it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub message: RequestMessage,
    pub message_bytes: Vec<u8>,
    pub mint_did: String,
    pub signature: Vec<u8>,
}

/// Headers and body ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl RequestContext {
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
            (HEADER_MINT_KEY, self.mint_did.clone()),
            (HEADER_SIGNATURE, multibase_base58btc(&self.signature)),
        ]
    }

    pub fn into_auth_request(self) -> AuthRequest {
        AuthRequest {
            headers: self.headers(),
            body: self.message_bytes,
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Bytes actually passed to the signer: domain prefix followed by the message.
pub fn signing_payload(message_bytes: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(SIGNING_DOMAIN_PREFIX.len() + message_bytes.len());
    payload.extend_from_slice(SIGNING_DOMAIN_PREFIX);
    payload.extend_from_slice(message_bytes);
    payload
}

/// base58btc multibase: `z` followed by the base58 (Bitcoin alphabet) encoding.
pub fn multibase_base58btc(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(1 + bytes.len() * 2);
    out.push(MULTIBASE_BASE58BTC);
    out.push_str(&bs58::encode(bytes).into_string());
    out
}

/// `did:key` identifier for an Ed25519 public key.
pub fn key_did(pubkey: &[u8]) -> String {
    let mut key_with_codec = Vec::with_capacity(MULTICODEC_ED25519_PUBKEY.len() + pubkey.len());
    key_with_codec.extend_from_slice(&MULTICODEC_ED25519_PUBKEY);
    key_with_codec.extend_from_slice(pubkey);
    format!("did:key:{}", multibase_base58btc(&key_with_codec))
}

/// Build and sign the "put CAR" message for `root_cid`.
pub async fn make_put_car_request_context<S: Signer>(
    auth: &AuthContext<S>,
    root_cid: &RootCid,
) -> Result<RequestContext, SdkError> {
    let message = RequestMessage::put_car(root_cid.clone(), auth.chain, auth.solana_cluster);
    let message_bytes = serde_json::to_vec(&message)?;
    let to_sign = signing_payload(&message_bytes);

    let mint_did = key_did(auth.pubkey.as_ref());
    let signature = auth
        .signer
        .sign_message(&to_sign)
        .await
        .map_err(AuthError::Signing)?;

    Ok(RequestContext {
        message,
        message_bytes,
        mint_did,
        signature,
    })
}

/// Build the signed headers and body for an upload-token request.
pub async fn build_auth_request<S: Signer>(
    auth: &AuthContext<S>,
    root_cid: &RootCid,
) -> Result<AuthRequest, SdkError> {
    Ok(make_put_car_request_context(auth, root_cid)
        .await?
        .into_auth_request())
}
