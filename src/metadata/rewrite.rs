//! Replace bare filenames in metadata with links into the asset CAR.

use crate::metadata::links::{make_gateway_url, make_ipfs_uri};
use crate::metadata::{FileDescription, MetaplexMetadata};

/// Image filename used when the image file has no name.
pub const DEFAULT_IMAGE_FILENAME: &str = "image.png";

/// Rewrite `metadata` so its file references point into the asset CAR rooted
/// at `asset_root_cid`.
///
/// - `image` becomes the gateway URL of `image_filename`, unconditionally.
/// - `animation_url` becomes a gateway URL only when it names one of
///   `additional_filenames`; any other value is kept verbatim.
/// - Each `properties.files` entry whose `uri` names a packaged file is
///   replaced by two copies: a gateway URL with `cdn = true`, then an
///   `ipfs://` URI with `cdn = false`. Other entries pass through untouched.
pub fn replace_file_refs_with_ipfs_links(
    metadata: MetaplexMetadata,
    image_filename: &str,
    additional_filenames: &[String],
    asset_root_cid: &str,
) -> MetaplexMetadata {
    let image_filename = if image_filename.is_empty() {
        DEFAULT_IMAGE_FILENAME
    } else {
        image_filename
    };
    let is_packaged =
        |uri: &str| uri == image_filename || additional_filenames.iter().any(|n| n == uri);

    let files: Vec<FileDescription> = metadata
        .properties
        .files
        .into_iter()
        .flat_map(|f| {
            if is_packaged(&f.uri) {
                let gateway = FileDescription {
                    uri: make_gateway_url(asset_root_cid, &f.uri),
                    cdn: Some(true),
                    ..f.clone()
                };
                let ipfs = FileDescription {
                    uri: make_ipfs_uri(asset_root_cid, &f.uri),
                    cdn: Some(false),
                    ..f
                };
                vec![gateway, ipfs]
            } else {
                vec![f]
            }
        })
        .collect();

    let animation_url = metadata.animation_url.map(|url| {
        if additional_filenames.iter().any(|n| *n == url) {
            make_gateway_url(asset_root_cid, &url)
        } else {
            url
        }
    });

    MetaplexMetadata {
        image: make_gateway_url(asset_root_cid, image_filename),
        animation_url,
        properties: crate::metadata::Properties {
            files,
            ..metadata.properties
        },
        ..metadata
    }
}
