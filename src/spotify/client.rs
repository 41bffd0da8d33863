use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header::CONTENT_LENGTH};
use serde_json::Value;
use tokio::{
    sync::{Mutex, OnceCell},
    time::sleep,
};

use crate::{
    config,
    management::TokenManager,
    spotify::{ClientError, PlaybackClient, PlaylistClient},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, PlaybackState, SearchTracksResponse,
        StartPlaybackRequest,
    },
    voice::RepeatState,
    warning,
};

const SEARCH_PAGE_LIMIT: u32 = 50;
const ADD_TRACKS_CHUNK: usize = 100;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Spotify Web API client backed by the cached OAuth token.
///
/// One instance is shared by every action task; the token manager sits
/// behind a mutex so concurrent tasks refresh it at most once.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
    user_id: OnceCell<String>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        let user_id = OnceCell::new_with(config::spotify_user());
        Self {
            http: Client::new(),
            api_url: config::spotify_apiurl(),
            tokens: Mutex::new(tokens),
            user_id,
        }
    }

    /// Loads the cached token written by `playurmood auth`.
    pub async fn from_cache() -> Result<Self, ClientError> {
        let tokens = TokenManager::load().await.map_err(|e| {
            ClientError::Unauthenticated(format!("{}. Please run playurmood auth", e))
        })?;
        Ok(Self::new(tokens))
    }

    async fn token(&self) -> Result<String, ClientError> {
        self.tokens
            .lock()
            .await
            .get_valid_token()
            .await
            .map_err(ClientError::Unauthenticated)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sends a request built by `build`, retrying on 502 and on 429 with a
    /// reasonable `Retry-After`. Non-success statuses become [`ClientError::Api`].
    async fn send<F>(&self, build: F) -> Result<Response, ClientError>
    where
        F: Fn(&Client) -> RequestBuilder + Send + Sync,
    {
        loop {
            let token = self.token().await?;
            let response = build(&self.http).bearer_auth(token).send().await?;
            let status = response.status();

            if status == StatusCode::BAD_GATEWAY {
                sleep(BAD_GATEWAY_DELAY).await;
                continue; // retry
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                if retry_after <= MAX_RETRY_AFTER_SECS {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds.",
                    retry_after
                );
            }

            if status.is_success() {
                return Ok(response);
            }

            return Err(api_error(status, response).await);
        }
    }

    async fn current_user_id(&self) -> Result<String, ClientError> {
        let id = self
            .user_id
            .get_or_try_init(|| async {
                let me: CurrentUser = self
                    .send(|c| c.get(self.url("/me")))
                    .await?
                    .json()
                    .await?;
                Ok::<_, ClientError>(me.id)
            })
            .await?;
        Ok(id.clone())
    }
}

async fn api_error(status: StatusCode, response: Response) -> ClientError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl PlaylistClient for SpotifyClient {
    async fn create_playlist(&self, name: &str) -> Result<String, ClientError> {
        let user_id = self.current_user_id().await?;
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Created by PlayURMood".to_string(),
            public: false,
            collaborative: false,
        };

        let playlist: CreatePlaylistResponse = self
            .send(|c| {
                c.post(self.url(&format!("/users/{}/playlists", user_id)))
                    .json(&body)
            })
            .await?
            .json()
            .await?;

        Ok(playlist.id)
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<String>, ClientError> {
        let mut uris: Vec<String> = Vec::new();

        while (uris.len() as u32) < limit {
            let page = SEARCH_PAGE_LIMIT.min(limit - uris.len() as u32);
            let offset = uris.len().to_string();
            let page_str = page.to_string();

            let res: SearchTracksResponse = self
                .send(|c| {
                    c.get(self.url("/search")).query(&[
                        ("q", query),
                        ("type", "track"),
                        ("limit", page_str.as_str()),
                        ("offset", offset.as_str()),
                    ])
                })
                .await?
                .json()
                .await?;

            let received = res.tracks.items.len();
            uris.extend(res.tracks.items.into_iter().map(|t| t.uri));

            if received == 0 || res.tracks.next.is_none() {
                break;
            }
        }

        uris.truncate(limit as usize);
        Ok(uris)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError> {
        for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };
            let _: AddTrackToPlaylistResponse = self
                .send(|c| {
                    c.post(self.url(&format!("/playlists/{}/tracks", playlist_id)))
                        .json(&body)
                })
                .await?
                .json()
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl PlaybackClient for SpotifyClient {
    async fn start_playback(&self, context_uri: Option<&str>) -> Result<(), ClientError> {
        let body = StartPlaybackRequest {
            context_uri: context_uri.map(str::to_string),
        };
        self.send(|c| c.put(self.url("/me/player/play")).json(&body))
            .await?;
        Ok(())
    }

    async fn pause_playback(&self) -> Result<(), ClientError> {
        self.send(|c| c.put(self.url("/me/player/pause")).header(CONTENT_LENGTH, 0))
            .await?;
        Ok(())
    }

    async fn next_track(&self) -> Result<(), ClientError> {
        self.send(|c| c.post(self.url("/me/player/next")).header(CONTENT_LENGTH, 0))
            .await?;
        Ok(())
    }

    async fn previous_track(&self) -> Result<(), ClientError> {
        self.send(|c| c.post(self.url("/me/player/previous")).header(CONTENT_LENGTH, 0))
            .await?;
        Ok(())
    }

    async fn current_playback(&self) -> Result<Option<PlaybackState>, ClientError> {
        let response = self.send(|c| c.get(self.url("/me/player"))).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| ClientError::Other(format!("Invalid playback state: {}", e)))
    }

    async fn set_shuffle(&self, state: bool) -> Result<(), ClientError> {
        let state = state.to_string();
        self.send(|c| {
            c.put(self.url("/me/player/shuffle"))
                .query(&[("state", state.as_str())])
                .header(CONTENT_LENGTH, 0)
        })
        .await?;
        Ok(())
    }

    async fn set_repeat(&self, state: RepeatState) -> Result<(), ClientError> {
        self.send(|c| {
            c.put(self.url("/me/player/repeat"))
                .query(&[("state", state.as_str())])
                .header(CONTENT_LENGTH, 0)
        })
        .await?;
        Ok(())
    }
}
