use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    config,
    management::TokenManager,
    server::start_api_server,
    spotify::ClientError,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    #[serde(default)]
    scope: String,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self, previous_refresh: Option<&str>) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self
                .refresh_token
                .or_else(|| previous_refresh.map(str::to_string))
                .unwrap_or_default(),
            scope: self.scope,
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// 1. Generates the PKCE code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback handler to exchange the code
/// 5. Persists the token for later runs
///
/// Browser launch failures only produce a warning with the URL to open by
/// hand. A timeout or a failed token save is returned as an error.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Result<(), ClientError> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let client_id = config::spotify_client_id().map_err(|e| ClientError::Unauthenticated(e.to_string()))?;

    // Store verifier in shared state before the server can receive a callback
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope().replace(' ', "%20")
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    match token {
        Some(t) => {
            TokenManager::new(t)
                .persist()
                .await
                .map_err(|e| ClientError::Other(format!("Failed to save token to cache: {}", e)))?;

            success!("Authentication successful!");
            Ok(())
        }
        None => Err(ClientError::Unauthenticated(
            "authentication failed or timed out".to_string(),
        )),
    }
}

/// Polls the shared state for a token once per second, for at most 60 seconds.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token; when the response has
/// none the previous one is kept.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, ClientError> {
    let client_id = config::spotify_client_id().map_err(|e| ClientError::Unauthenticated(e.to_string()))?;

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(json.into_token(Some(refresh_token)))
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// The verifier must be the one whose challenge was sent in the initial
/// authorization request.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, ClientError> {
    let client_id = config::spotify_client_id().map_err(|e| ClientError::Unauthenticated(e.to_string()))?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = res.json().await?;
    Ok(json.into_token(None))
}
