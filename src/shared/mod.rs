//! Shared newtypes used across all modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the authorization service and NFT.Storage exchange, so they can
//! be used directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── RootCid ─────────────────────────────────────────────────────────────────

/// Root content identifier of an encoded CAR (e.g. `"bafybeig..."`).
///
/// Opaque: it is only ever interpolated into links and request messages,
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootCid(String);

impl RootCid {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RootCid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RootCid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RootCid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for RootCid {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RootCid(s.to_string()))
    }
}

impl Serialize for RootCid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RootCid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RootCid(s))
    }
}

// ─── Chain ───────────────────────────────────────────────────────────────────

/// Blockchain the minting key belongs to. Only Solana is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Solana,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solana => "solana",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── SolanaCluster ───────────────────────────────────────────────────────────

/// Solana cluster an upload is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolanaCluster {
    #[serde(rename = "mainnet-beta")]
    MainnetBeta,
    #[serde(rename = "devnet")]
    Devnet,
}

impl SolanaCluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainnetBeta => "mainnet-beta",
            Self::Devnet => "devnet",
        }
    }
}

impl std::fmt::Display for SolanaCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SolanaCluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" => Ok(Self::MainnetBeta),
            "devnet" => Ok(Self::Devnet),
            other => Err(format!("unknown solana cluster: {}", other)),
        }
    }
}
