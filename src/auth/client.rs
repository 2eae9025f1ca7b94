//! Auth sub-client: upload token exchange.

use crate::auth::{build_auth_request, AuthContext, Signer};
use crate::car::CarEncoder;
use crate::client::MetaplexStorageClient;
use crate::error::SdkError;
use crate::http::NftStorageHttp;
use crate::shared::RootCid;

/// Sub-client for authorization operations.
pub struct Auth<'a, E> {
    pub(crate) client: &'a MetaplexStorageClient<E>,
}

impl<'a, E: CarEncoder> Auth<'a, E> {
    /// Obtain an NFT.Storage upload token for the CAR rooted at `root_cid`.
    pub async fn get_upload_token<S: Signer>(
        &self,
        auth: &AuthContext<S>,
        root_cid: &RootCid,
    ) -> Result<String, SdkError> {
        get_upload_token(&self.client.http, auth, root_cid).await
    }
}

/// Sign a put request for `root_cid` and exchange it for an upload token.
///
/// Fails with a request error on non-2xx status (the body is not read), and
/// with a malformed-response error when the body lacks a string `token`.
pub async fn get_upload_token<S: Signer>(
    http: &NftStorageHttp,
    auth: &AuthContext<S>,
    root_cid: &RootCid,
) -> Result<String, SdkError> {
    let request = build_auth_request(auth, root_cid).await?;
    Ok(http.request_upload_token(&request).await?)
}
