//! Gateway URL and `ipfs://` URI construction.
//!
//! Both helpers resolve `path` as a relative reference against a base that
//! ends in `/<cid>/`. The trailing slash keeps the CID segment: resolving
//! against `/ipfs/<cid>` instead would replace it.

use url::Url;

use crate::network::GATEWAY_HOST;

/// `https://dweb.link/ipfs/<cid>/<path>`
pub fn make_gateway_url(cid: &str, path: &str) -> String {
    resolve(&format!("{}/ipfs/{}/", GATEWAY_HOST, cid), path)
}

/// `ipfs://<cid>/<path>`
pub fn make_ipfs_uri(cid: &str, path: &str) -> String {
    resolve(&format!("ipfs://{}/", cid), path)
}

fn resolve(base: &str, path: &str) -> String {
    match Url::parse(base).and_then(|b| b.join(path)) {
        Ok(url) => url.into(),
        Err(e) => {
            // CIDs and filenames are not validated here; keep the plain concatenation.
            tracing::debug!(base, path, error = %e, "URL resolution failed");
            format!("{}{}", base, path)
        }
    }
}
