//! Packaging tests: asset CAR, metadata rewriting, metadata CAR.

mod common;

use std::sync::atomic::Ordering;

use common::{fake_cid, sample_metadata, BrokenEncoder, FakeEncoder};
use metaplex_storage_sdk::prelude::*;
use serde_json::json;

fn assets() -> (File, Vec<File>) {
    (
        File::new("cat.png", b"png-bytes".to_vec()),
        vec![File::new("cat.mp4", b"mp4-bytes".to_vec())],
    )
}

#[tokio::test]
async fn test_prepare_rewrites_links_to_asset_root() {
    let encoder = FakeEncoder::default();
    let (image, extra) = assets();
    let asset_cid = fake_cid(&[image.clone(), extra[0].clone()]);

    let nft = prepare_metaplex_nft(&encoder, sample_metadata(), image, extra)
        .await
        .unwrap();

    assert_eq!(nft.encoded_assets.cid.as_str(), asset_cid);
    assert_eq!(
        nft.metadata.image,
        format!("https://dweb.link/ipfs/{}/cat.png", asset_cid)
    );
    assert_eq!(
        nft.metadata.animation_url,
        Some(format!("https://dweb.link/ipfs/{}/cat.mp4", asset_cid))
    );

    let files = &nft.metadata.properties.files;
    assert_eq!(files.len(), 5);
    assert_eq!(files[0].uri, format!("https://dweb.link/ipfs/{}/cat.png", asset_cid));
    assert_eq!(files[0].cdn, Some(true));
    assert_eq!(files[1].uri, format!("ipfs://{}/cat.png", asset_cid));
    assert_eq!(files[1].cdn, Some(false));
    assert_eq!(files[2].uri, format!("https://dweb.link/ipfs/{}/cat.mp4", asset_cid));
    assert_eq!(files[3].uri, format!("ipfs://{}/cat.mp4", asset_cid));
    assert_eq!(files[3].file_type.as_deref(), Some("video/mp4"));
    assert_eq!(files[4].uri, "https://example.com/cat-hd.png");
    assert_eq!(files[4].cdn, Some(true));
}

#[tokio::test]
async fn test_prepare_encodes_assets_then_metadata_json() {
    let encoder = FakeEncoder::default();
    let (image, extra) = assets();

    let nft = prepare_metaplex_nft(&encoder, sample_metadata(), image, extra)
        .await
        .unwrap();

    let calls = encoder.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);

    let asset_names: Vec<&str> = calls[0].iter().map(|f| f.name.as_str()).collect();
    assert_eq!(asset_names, vec!["cat.png", "cat.mp4"]);

    assert_eq!(calls[1].len(), 1);
    let metadata_file = &calls[1][0];
    assert_eq!(metadata_file.name, "metadata.json");
    let written: MetaplexMetadata = serde_json::from_slice(&metadata_file.data).unwrap();
    assert_eq!(written, nft.metadata);
    // Compact JSON, like the service expects to fetch.
    assert!(!metadata_file.data.contains(&b'\n'));

    let metadata_cid = fake_cid(&calls[1]);
    assert_eq!(nft.encoded_metadata.cid.as_str(), metadata_cid);
    assert_eq!(
        nft.metadata_gateway_url,
        format!("https://dweb.link/ipfs/{}/metadata.json", metadata_cid)
    );
    assert_eq!(nft.metadata_uri, format!("ipfs://{}/metadata.json", metadata_cid));
}

#[tokio::test]
async fn test_prepare_is_deterministic() {
    let (image, extra) = assets();
    let a = prepare_metaplex_nft(&FakeEncoder::default(), sample_metadata(), image.clone(), extra.clone())
        .await
        .unwrap();
    let b = prepare_metaplex_nft(&FakeEncoder::default(), sample_metadata(), image, extra)
        .await
        .unwrap();

    assert_eq!(a.metadata_uri, b.metadata_uri);
    assert_eq!(a.encoded_metadata, b.encoded_metadata);
    assert_eq!(a.encoded_assets, b.encoded_assets);
}

#[tokio::test]
async fn test_unnamed_image_uses_default_filename() {
    let encoder = FakeEncoder::default();
    let mut doc = sample_metadata();
    doc["properties"]["files"] = json!([{ "uri": "image.png" }]);

    let nft = prepare_metaplex_nft(&encoder, doc, File::new("", b"png".to_vec()), vec![])
        .await
        .unwrap();

    assert!(nft.metadata.image.ends_with("/image.png"));
    assert_eq!(nft.metadata.properties.files.len(), 2);
    // Not an additional file, so the animation stays a bare name.
    assert_eq!(nft.metadata.animation_url.as_deref(), Some("cat.mp4"));
}

#[tokio::test]
async fn test_invalid_metadata_fails_before_encoding() {
    let encoder = FakeEncoder::default();
    let (image, extra) = assets();

    let err = prepare_metaplex_nft(&encoder, json!({ "name": "no image" }), image, extra)
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Validation(_)));
    assert_eq!(encoder.call_count(), 0);
}

#[tokio::test]
async fn test_encoder_failure_is_encoding_error() {
    let encoder = BrokenEncoder::default();
    let (image, extra) = assets();

    let err = prepare_metaplex_nft(&encoder, sample_metadata(), image, extra)
        .await
        .unwrap_err();

    match err {
        SdkError::Encoding(source) => assert_eq!(source.to_string(), "block store unavailable"),
        other => panic!("expected encoding error, got {other:?}"),
    }
    assert_eq!(encoder.calls.load(Ordering::SeqCst), 1);
}
