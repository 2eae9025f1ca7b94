//! Content-addressed archive (CAR) seam.
//!
//! The SDK does not produce CAR bytes itself. Callers plug in an encoder
//! (an IPFS UnixFS directory packer) through [`CarEncoder`].

use async_trait::async_trait;

use crate::error::BoxError;
use crate::shared::RootCid;

/// A named in-memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub data: Vec<u8>,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// An encoded CAR and the CID of its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCar {
    pub car: Vec<u8>,
    pub cid: RootCid,
}

/// Packs files into a single CAR whose root is a directory containing them.
///
/// Implementations must be deterministic: identical names and contents in the
/// same order yield the same root CID and bytes.
#[async_trait]
pub trait CarEncoder: Send + Sync {
    async fn encode_directory(&self, files: &[File]) -> Result<EncodedCar, BoxError>;
}
