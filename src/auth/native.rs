//! Native auth: keypair-based signing.
//!
//! Only available with the `native-auth` feature.

use async_trait::async_trait;
use solana_keypair::Keypair;
use solana_signer::Signer as _;

use crate::auth::{AuthContext, Signer};
use crate::error::BoxError;
use crate::shared::SolanaCluster;

#[async_trait]
impl Signer for Keypair {
    async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, BoxError> {
        let signature = solana_signer::Signer::try_sign_message(self, message)?;
        Ok(signature.as_ref().to_vec())
    }
}

impl AuthContext<Keypair> {
    /// Auth context that signs with a local keypair.
    pub fn from_keypair(keypair: Keypair, solana_cluster: SolanaCluster) -> Self {
        let pubkey = keypair.pubkey();
        AuthContext::new(solana_cluster, keypair, pubkey)
    }
}
