//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use metaplex_storage_sdk::prelude::*;
use serde_json::{json, Value};
use sha3::{Digest, Sha3_256};

/// Deterministic stand-in for a UnixFS CAR encoder.
///
/// The "CID" is a hash over names and contents; the "CAR" is the file
/// contents joined with their names. Every call is recorded.
#[derive(Default)]
pub struct FakeEncoder {
    pub calls: Mutex<Vec<Vec<File>>>,
}

impl FakeEncoder {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn fake_cid(files: &[File]) -> String {
    let mut hasher = Sha3_256::new();
    for f in files {
        hasher.update(f.name.as_bytes());
        hasher.update([0u8]);
        hasher.update(&f.data);
        hasher.update([0u8]);
    }
    format!("bafy{}", &hex::encode(hasher.finalize())[..32])
}

#[async_trait]
impl CarEncoder for FakeEncoder {
    async fn encode_directory(&self, files: &[File]) -> Result<EncodedCar, BoxError> {
        self.calls.lock().unwrap().push(files.to_vec());
        let mut car = Vec::new();
        for f in files {
            car.extend_from_slice(f.name.as_bytes());
            car.extend_from_slice(&f.data);
        }
        Ok(EncodedCar {
            car,
            cid: RootCid::new(fake_cid(files)),
        })
    }
}

/// Encoder that always fails.
#[derive(Default)]
pub struct BrokenEncoder {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CarEncoder for BrokenEncoder {
    async fn encode_directory(&self, _files: &[File]) -> Result<EncodedCar, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("block store unavailable".into())
    }
}

/// Signer returning a fixed 64-byte signature and counting calls.
#[derive(Default)]
pub struct StaticSigner {
    pub calls: AtomicUsize,
}

pub const STATIC_SIGNATURE: [u8; 64] = [5u8; 64];

#[async_trait]
impl Signer for StaticSigner {
    async fn sign_message(&self, _message: &[u8]) -> Result<Vec<u8>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(STATIC_SIGNATURE.to_vec())
    }
}

pub fn devnet_auth() -> AuthContext<StaticSigner> {
    AuthContext::new(
        SolanaCluster::Devnet,
        StaticSigner::default(),
        solana_pubkey::Pubkey::new_from_array([1u8; 32]),
    )
}

pub fn sample_metadata() -> Value {
    json!({
        "name": "Cool Cat #1",
        "symbol": "CAT",
        "description": "an orange cat",
        "seller_fee_basis_points": 250,
        "image": "cat.png",
        "animation_url": "cat.mp4",
        "properties": {
            "category": "video",
            "files": [
                { "uri": "cat.png", "type": "image/png" },
                { "uri": "cat.mp4", "type": "video/mp4" },
                { "uri": "https://example.com/cat-hd.png", "type": "image/png", "cdn": true }
            ],
            "creators": [{ "address": "11111111111111111111111111111111", "share": 100 }]
        }
    })
}
