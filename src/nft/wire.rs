//! Wire types for NFT.Storage CAR uploads.

use serde::{Deserialize, Serialize};

use crate::shared::RootCid;

/// Response from `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub ok: bool,
    #[serde(default)]
    pub value: Option<UploadValue>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadValue {
    pub cid: RootCid,
}
