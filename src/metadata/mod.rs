//! Metaplex NFT metadata: schema types, validation, link helpers, rewriting.

pub mod links;
pub mod rewrite;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SdkError;

pub use links::{make_gateway_url, make_ipfs_uri};
pub use rewrite::{replace_file_refs_with_ipfs_links, DEFAULT_IMAGE_FILENAME};

/// Upper bound for `seller_fee_basis_points` (100%).
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

/// Off-chain Metaplex token metadata (`metadata.json`).
///
/// Keys the SDK does not model are kept in `extra` and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaplexMetadata {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_fee_basis_points: Option<u16>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Collection>,
    pub properties: Properties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `properties` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub files: Vec<FileDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<Creator>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `properties.files`.
///
/// `uri` is either a bare filename still to be resolved against a packaged
/// CAR, or an already-resolved URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescription {
    pub uri: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Creator entry with a royalty share in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub share: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trait/value attribute. `value` may be a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Validate an untyped metadata document and return it in typed form.
///
/// Fails with [`SdkError::Validation`] when the document does not have the
/// Metaplex shape or carries out-of-range royalty values.
pub fn ensure_valid_metadata(metadata: Value) -> Result<MetaplexMetadata, SdkError> {
    let parsed: MetaplexMetadata = serde_json::from_value(metadata)
        .map_err(|e| SdkError::Validation(format!("invalid metadata: {}", e)))?;
    parsed.validate()?;
    Ok(parsed)
}

impl MetaplexMetadata {
    /// Range and consistency checks that the type system does not cover.
    pub fn validate(&self) -> Result<(), SdkError> {
        if let Some(fee) = self.seller_fee_basis_points {
            if fee > MAX_SELLER_FEE_BASIS_POINTS {
                return Err(SdkError::Validation(format!(
                    "seller_fee_basis_points must be <= {}, got {}",
                    MAX_SELLER_FEE_BASIS_POINTS, fee
                )));
            }
        }

        if let Some(creators) = self.properties.creators.as_ref() {
            if !creators.is_empty() {
                let total: u32 = creators.iter().map(|c| c.share as u32).sum();
                if total != 100 {
                    return Err(SdkError::Validation(format!(
                        "creator shares must sum to 100, got {}",
                        total
                    )));
                }
            }
        }

        if let Some(index) = self.properties.files.iter().position(|f| f.uri.is_empty()) {
            return Err(SdkError::Validation(format!(
                "properties.files[{}].uri must not be empty",
                index
            )));
        }

        Ok(())
    }
}
