//! HTTP client for the two form endpoints.
//!
//! The endpoints answer with different shapes (`{success}` for interests,
//! `{status, message}` for the profile); both are kept as they are and
//! interpreted by the core controllers.

use gloo::net::http::Request;
use tripmate_core::{
    ClientError, ClientResult, InterestsRequest, InterestsResponse, ProfileDraft,
    ProfileResponse, INTERESTS_ENDPOINT, PROFILE_ENDPOINT,
};
use web_sys::RequestCredentials;

fn transport(err: gloo::net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

/// `POST /interests`. Any decodable body is returned as-is; the caller
/// checks the `success` flag.
pub async fn post_interests(body: &InterestsRequest) -> ClientResult<InterestsResponse> {
    let response = Request::post(INTERESTS_ENDPOINT)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    tracing::debug!(status = response.status(), "POST {}", INTERESTS_ENDPOINT);
    response.json::<InterestsResponse>().await.map_err(transport)
}

/// `POST /profile` with credentials. A non-success status fails before the
/// body is read.
pub async fn post_profile(draft: &ProfileDraft) -> ClientResult<ProfileResponse> {
    let response = Request::post(PROFILE_ENDPOINT)
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .json(draft)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    tracing::debug!(status = response.status(), "POST {}", PROFILE_ENDPOINT);
    if !response.ok() {
        return Err(ClientError::Http {
            status: response.status(),
        });
    }
    response.json::<ProfileResponse>().await.map_err(transport)
}
