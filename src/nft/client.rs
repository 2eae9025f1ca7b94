//! NFT sub-client: packaging and storing.

use serde_json::Value;

use crate::auth::client::get_upload_token;
use crate::auth::{AuthContext, Signer};
use crate::car::{CarEncoder, EncodedCar, File};
use crate::client::MetaplexStorageClient;
use crate::error::SdkError;
use crate::nft::{prepare_metaplex_nft, PackagedNft};
use crate::shared::RootCid;

/// Links and roots of an NFT whose CARs have both been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNft {
    pub metadata_uri: String,
    pub metadata_gateway_url: String,
    pub asset_root_cid: RootCid,
    pub metadata_root_cid: RootCid,
}

/// Sub-client for NFT packaging and upload.
pub struct Nfts<'a, E> {
    pub(crate) client: &'a MetaplexStorageClient<E>,
}

impl<'a, E: CarEncoder> Nfts<'a, E> {
    /// Encode metadata and assets into CARs. Nothing is uploaded.
    pub async fn prepare(
        &self,
        metadata: Value,
        image_file: File,
        additional_asset_files: Vec<File>,
    ) -> Result<PackagedNft, SdkError> {
        prepare_metaplex_nft(
            &self.client.encoder,
            metadata,
            image_file,
            additional_asset_files,
        )
        .await
    }

    /// Authorize and upload one CAR. Each CAR needs its own token because the
    /// signed request is bound to a single root CID.
    pub async fn store_car<S: Signer>(
        &self,
        auth: &AuthContext<S>,
        encoded: &EncodedCar,
    ) -> Result<RootCid, SdkError> {
        let token = get_upload_token(&self.client.http, auth, &encoded.cid).await?;
        let stored = self.client.http.upload_car(&token, &encoded.car).await?;
        if stored != encoded.cid {
            tracing::warn!(
                local = %encoded.cid,
                remote = %stored,
                "Stored CAR root differs from local root"
            );
        }
        Ok(stored)
    }

    /// Upload the asset CAR, then the metadata CAR.
    pub async fn store_prepared<S: Signer>(
        &self,
        auth: &AuthContext<S>,
        nft: &PackagedNft,
    ) -> Result<StoredNft, SdkError> {
        let asset_root_cid = self.store_car(auth, &nft.encoded_assets).await?;
        let metadata_root_cid = self.store_car(auth, &nft.encoded_metadata).await?;

        Ok(StoredNft {
            metadata_uri: nft.metadata_uri.clone(),
            metadata_gateway_url: nft.metadata_gateway_url.clone(),
            asset_root_cid,
            metadata_root_cid,
        })
    }

    /// Prepare and store in one call.
    pub async fn store<S: Signer>(
        &self,
        auth: &AuthContext<S>,
        metadata: Value,
        image_file: File,
        additional_asset_files: Vec<File>,
    ) -> Result<StoredNft, SdkError> {
        let nft = self
            .prepare(metadata, image_file, additional_asset_files)
            .await?;
        self.store_prepared(auth, &nft).await
    }
}
