//! Proof-key-for-code-exchange (RFC 7636) helpers for the audio provider login.
//!
//! The site redirects the browser to the provider with a code challenge and
//! keeps the matching verifier in local storage until the provider redirects
//! back with an authorization code.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::PkceError;

/// Random bytes behind a verifier; encodes to 86 characters.
const VERIFIER_BYTES: usize = 64;

/// Builds a verifier from raw random bytes.
pub fn verifier_from_bytes(bytes: &[u8]) -> Result<String, PkceError> {
    let verifier = URL_SAFE_NO_PAD.encode(bytes);
    if !(43..=128).contains(&verifier.len()) {
        return Err(PkceError::InvalidVerifierLength(verifier.len()));
    }
    Ok(verifier)
}

/// Generates a fresh verifier from the platform random source.
pub fn generate_verifier() -> Result<String, PkceError> {
    let mut bytes = [0u8; VERIFIER_BYTES];
    getrandom::getrandom(&mut bytes).map_err(|e| PkceError::RandomUnavailable(e.to_string()))?;
    verifier_from_bytes(&bytes)
}

/// S256 challenge for `verifier`.
pub fn challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

/// Query parameters of the authorization redirect.
pub fn authorize_params<'a>(
    client_id: &'a str,
    redirect_uri: &'a str,
    scopes: &'a str,
    challenge: &'a str,
) -> [(&'static str, &'a str); 6] {
    [
        ("response_type", "code"),
        ("client_id", client_id),
        ("scope", scopes),
        ("redirect_uri", redirect_uri),
        ("code_challenge_method", "S256"),
        ("code_challenge", challenge),
    ]
}

/// Form fields of the authorization-code exchange.
pub fn token_params<'a>(
    client_id: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
    verifier: &'a str,
) -> [(&'static str, &'a str); 5] {
    [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", redirect_uri),
        ("client_id", client_id),
        ("code_verifier", verifier),
    ]
}

/// Token endpoint response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc7636_vector() {
        // RFC 7636, Appendix B
        let bytes = [
            116, 24, 223, 180, 151, 153, 224, 37, 79, 250, 96, 125, 216, 173, 187, 186, 22, 212,
            37, 77, 105, 214, 191, 240, 91, 88, 5, 88, 83, 132, 141, 121,
        ];
        let verifier = verifier_from_bytes(&bytes).unwrap();
        assert_eq!(verifier, "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        assert_eq!(
            challenge(&verifier),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn test_generated_verifier_shape() {
        let verifier = generate_verifier().unwrap();
        assert_eq!(verifier.len(), 86);
        assert!(
            verifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_ne!(verifier, generate_verifier().unwrap());
    }

    #[test]
    fn test_verifier_length_bounds() {
        assert_eq!(
            verifier_from_bytes(&[0u8; 16]),
            Err(PkceError::InvalidVerifierLength(22))
        );
        assert!(verifier_from_bytes(&[0u8; 96]).is_ok());
        assert!(verifier_from_bytes(&[0u8; 97]).is_err());
    }

    #[test]
    fn test_authorize_params() {
        let params = authorize_params("client", "https://folio.example/callback", "streaming", "abc");
        assert!(params.contains(&("code_challenge_method", "S256")));
        assert!(params.contains(&("code_challenge", "abc")));
        assert!(params.contains(&("redirect_uri", "https://folio.example/callback")));
    }

    #[test]
    fn test_token_response() {
        let json = r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600,"scope":"streaming"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.refresh_token, None);
        assert_eq!(token.expires_in, 3600);
    }
}
