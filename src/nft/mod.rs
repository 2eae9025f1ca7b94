//! NFT packaging: asset CAR + rewritten metadata CAR.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde_json::Value;

use crate::car::{CarEncoder, EncodedCar, File};
use crate::error::SdkError;
use crate::metadata::{
    ensure_valid_metadata, make_gateway_url, make_ipfs_uri, replace_file_refs_with_ipfs_links,
    MetaplexMetadata, DEFAULT_IMAGE_FILENAME,
};

/// Filename of the serialized metadata inside the metadata CAR.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Output of [`prepare_metaplex_nft`]. Nothing in here has been uploaded yet;
/// the links resolve only once both CARs are stored.
#[derive(Debug, Clone)]
pub struct PackagedNft {
    /// Metadata with file references rewritten to asset CAR links.
    pub metadata: MetaplexMetadata,
    pub metadata_gateway_url: String,
    pub metadata_uri: String,
    pub encoded_metadata: EncodedCar,
    pub encoded_assets: EncodedCar,
}

/// Encode an NFT's metadata and asset files into two CARs.
///
/// The image and additional files are packed into the asset CAR first; its
/// root CID is used to rewrite the metadata (see
/// [`replace_file_refs_with_ipfs_links`]). The rewritten metadata is then
/// serialized as `metadata.json` and packed into its own CAR.
///
/// Metadata is validated before any encoding happens.
pub async fn prepare_metaplex_nft<E: CarEncoder + ?Sized>(
    encoder: &E,
    metadata: Value,
    image_file: File,
    additional_asset_files: Vec<File>,
) -> Result<PackagedNft, SdkError> {
    let validated = ensure_valid_metadata(metadata)?;

    let image_filename = if image_file.name.is_empty() {
        DEFAULT_IMAGE_FILENAME.to_string()
    } else {
        image_file.name.clone()
    };
    let additional_filenames: Vec<String> =
        additional_asset_files.iter().map(|f| f.name.clone()).collect();

    let mut asset_files = Vec::with_capacity(additional_asset_files.len() + 1);
    asset_files.push(image_file);
    asset_files.extend(additional_asset_files);

    let encoded_assets = encoder
        .encode_directory(&asset_files)
        .await
        .map_err(SdkError::Encoding)?;
    tracing::debug!(
        cid = %encoded_assets.cid,
        files = asset_files.len(),
        "Encoded asset CAR"
    );

    let linked_metadata = replace_file_refs_with_ipfs_links(
        validated,
        &image_filename,
        &additional_filenames,
        encoded_assets.cid.as_str(),
    );

    let metadata_file = File::new(METADATA_FILENAME, serde_json::to_vec(&linked_metadata)?);
    let encoded_metadata = encoder
        .encode_directory(std::slice::from_ref(&metadata_file))
        .await
        .map_err(SdkError::Encoding)?;
    tracing::debug!(cid = %encoded_metadata.cid, "Encoded metadata CAR");

    let metadata_gateway_url = make_gateway_url(encoded_metadata.cid.as_str(), METADATA_FILENAME);
    let metadata_uri = make_ipfs_uri(encoded_metadata.cid.as_str(), METADATA_FILENAME);

    Ok(PackagedNft {
        metadata: linked_metadata,
        metadata_gateway_url,
        metadata_uri,
        encoded_metadata,
        encoded_assets,
    })
}
