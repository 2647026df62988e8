//! Audio-provider login and Web API calls.
//!
//! Login is the authorization-code flow with PKCE: the verifier survives the
//! redirect in localStorage, and the access token is kept there afterwards.

use folio_core::pkce::{self, TokenResponse};
use folio_core::route::CALLBACK_PATH;
use folio_core::{PlaylistResponse, Track};
use serde_json::json;
use web_sys::{Url, UrlSearchParams};

use crate::config::PLAYLIST_API;
use crate::config::spotify::{
    AUTHORIZE_URL, CLIENT_ID, PLAY_URL, SCOPES, TOKEN_KEY, TOKEN_URL, VERIFIER_KEY,
};
use crate::core::error::{AuthError, FetchError, PlayerError};
use crate::utils::{dom, fetch_json, post_form, put_json};

fn redirect_uri() -> String {
    format!("{}{}", dom::current_origin(), CALLBACK_PATH)
}

/// Stored access token, if logged in.
pub fn stored_token() -> Option<String> {
    dom::storage_get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Forget the access token.
pub fn clear_token() {
    dom::storage_remove(TOKEN_KEY);
}

/// Start the login redirect.
pub fn begin_login() -> Result<(), AuthError> {
    let verifier = pkce::generate_verifier()?;
    if !dom::storage_set(VERIFIER_KEY, &verifier) {
        return Err(AuthError::StorageUnavailable);
    }

    let challenge = pkce::challenge(&verifier);
    let redirect_uri = redirect_uri();
    let url = Url::new(AUTHORIZE_URL).map_err(|_| AuthError::Pkce("bad authorize URL".into()))?;
    let params = url.search_params();
    for (name, value) in pkce::authorize_params(CLIENT_ID, &redirect_uri, SCOPES, &challenge) {
        params.append(name, value);
    }

    dom::redirect(&url.href());
    Ok(())
}

/// Decide what the callback query means.
fn callback_code(code: Option<String>, error: Option<String>) -> Result<String, AuthError> {
    if let Some(reason) = error {
        return Err(AuthError::Denied(reason));
    }
    code.filter(|c| !c.is_empty()).ok_or(AuthError::MissingCode)
}

/// Finish login from the callback page's query string.
///
/// On success the token is stored and returned; the verifier is removed
/// either way once a code exchange has been attempted.
pub async fn complete_login(search: &str) -> Result<String, AuthError> {
    let query = UrlSearchParams::new_with_str(search).map_err(|_| AuthError::MissingCode)?;
    let code = callback_code(query.get("code"), query.get("error"))?;
    let verifier = dom::storage_get(VERIFIER_KEY).ok_or(AuthError::MissingVerifier)?;

    let redirect_uri = redirect_uri();
    let fields = pkce::token_params(CLIENT_ID, &redirect_uri, &code, &verifier);
    let result = post_form::<TokenResponse>(TOKEN_URL, &fields).await;
    dom::storage_remove(VERIFIER_KEY);

    let token = result.map_err(AuthError::Exchange)?.access_token;
    if !dom::storage_set(TOKEN_KEY, &token) {
        return Err(AuthError::StorageUnavailable);
    }
    Ok(token)
}

/// Tracks of the site playlist, through the same-origin proxy.
pub async fn fetch_playlist() -> Result<Vec<Track>, FetchError> {
    fetch_json::<PlaylistResponse>(PLAYLIST_API)
        .await
        .map(|r| r.tracks)
}

/// Start `uri` on the SDK device.
pub async fn start_playback(token: &str, device_id: &str, uri: &str) -> Result<(), PlayerError> {
    let url = format!("{}?device_id={}", PLAY_URL, device_id);
    put_json(&url, token, &json!({ "uris": [uri] }))
        .await
        .map_err(PlayerError::Command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_code() {
        assert_eq!(
            callback_code(Some("abc".to_string()), None).unwrap(),
            "abc"
        );
        assert!(matches!(
            callback_code(Some("abc".to_string()), Some("access_denied".to_string())),
            Err(AuthError::Denied(reason)) if reason == "access_denied"
        ));
        assert!(matches!(
            callback_code(Some(String::new()), None),
            Err(AuthError::MissingCode)
        ));
        assert!(matches!(callback_code(None, None), Err(AuthError::MissingCode)));
    }
}
