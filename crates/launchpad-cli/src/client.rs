//! Async HTTP client for the SpaceX v4 launch API.

use std::time::Duration;

use launchpad_core::{dto::LaunchDto, store::LaunchSource};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v4/";

const LATEST_ENDPOINT: &str = "launches/latest";
const UPCOMING_ENDPOINT: &str = "launches/upcoming";
const PAST_ENDPOINT: &str = "launches/past";

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("GET {endpoint} → {status}")]
  Status {
    endpoint: &'static str,
    status:   StatusCode,
  },

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),
}

impl ClientError {
  /// The HTTP status, if the server answered at all.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::Status { status, .. } => Some(*status),
      Self::Http(e) => e.status(),
    }
  }
}

/// Connection settings for the launch API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub timeout:  Duration,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Async HTTP client for the SpaceX REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct SpaceXClient {
  client: Client,
  config: ApiConfig,
}

impl SpaceXClient {
  pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
  }

  async fn get<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ClientError> {
    let resp = self.client.get(self.url(endpoint)).send().await?;

    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(endpoint, %status, "launch API request failed");
      return Err(ClientError::Status { endpoint, status });
    }
    Ok(resp.json().await?)
  }
}

impl LaunchSource for SpaceXClient {
  type Error = ClientError;

  /// `GET launches/latest`
  async fn latest(&self) -> Result<Option<LaunchDto>, ClientError> {
    self.get(LATEST_ENDPOINT).await
  }

  /// `GET launches/upcoming`
  async fn upcoming(&self) -> Result<Vec<LaunchDto>, ClientError> {
    self.get(UPCOMING_ENDPOINT).await
  }

  /// `GET launches/past`
  async fn past(&self) -> Result<Vec<LaunchDto>, ClientError> {
    self.get(PAST_ENDPOINT).await
  }
}

#[cfg(test)]
mod tests {
  use axum::{Router, http::StatusCode, routing::get};
  use tokio::net::TcpListener;

  use super::*;

  const LAUNCH: &str = r#"{
    "flight_number": 110,
    "name": "Transporter-1",
    "id": "600f9a5e8f798e2a4d5f979c",
    "date_unix": 1611233160,
    "details": null,
    "upcoming": false,
    "success": true,
    "rocket": "5e9d0d95eda69973a809d1ec",
    "links": {
      "patch": { "small": "https://imgur.com/s.png", "large": "https://imgur.com/l.png" },
      "reddit": { "campaign": null },
      "flickr": { "small": [], "original": ["https://live.staticflickr.com/a.jpg"] },
      "webcast": "https://youtu.be/mu3W4qBhS4w",
      "article": null,
      "wikipedia": "https://en.wikipedia.org/wiki/Transporter-1"
    }
  }"#;

  /// Serve `router` on an ephemeral port and return a client pointed at it.
  async fn serve(router: Router) -> SpaceXClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    SpaceXClient::new(ApiConfig {
      base_url: format!("http://{addr}/v4/"),
      ..ApiConfig::default()
    })
    .unwrap()
  }

  fn json(body: String) -> ([(&'static str, &'static str); 1], String) {
    ([("content-type", "application/json")], body)
  }

  #[tokio::test]
  async fn latest_deserializes_single_object() {
    let client = serve(Router::new().route(
      "/v4/launches/latest",
      get(|| async { json(LAUNCH.to_string()) }),
    ))
    .await;

    let dto = client.latest().await.unwrap().unwrap();
    assert_eq!(dto.flight_number, 110);
    assert_eq!(dto.name, "Transporter-1");
    assert_eq!(dto.links.flickr.original.len(), 1);
  }

  #[tokio::test]
  async fn latest_null_body_is_none() {
    let client = serve(Router::new().route(
      "/v4/launches/latest",
      get(|| async { json("null".to_string()) }),
    ))
    .await;

    assert!(client.latest().await.unwrap().is_none());
  }

  #[tokio::test]
  async fn lists_deserialize_arrays() {
    let client = serve(
      Router::new()
        .route("/v4/launches/past", get(|| async { json(format!("[{LAUNCH},{LAUNCH}]")) }))
        .route("/v4/launches/upcoming", get(|| async { json("[]".to_string()) })),
    )
    .await;

    assert_eq!(client.past().await.unwrap().len(), 2);
    assert!(client.upcoming().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn non_success_status_carries_code() {
    let client = serve(Router::new().route(
      "/v4/launches/past",
      get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;

    let err = client.past().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert!(matches!(err, ClientError::Status { endpoint: "launches/past", .. }));
    assert!(err.to_string().contains("503"));
  }

  #[tokio::test]
  async fn latest_server_error_carries_code() {
    let client = serve(Router::new().route(
      "/v4/launches/latest",
      get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let err = client.latest().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(matches!(err, ClientError::Status { endpoint: "launches/latest", .. }));
  }

  #[tokio::test]
  async fn unknown_route_is_404() {
    let client = serve(Router::new()).await;
    let err = client.upcoming().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
  }
}
