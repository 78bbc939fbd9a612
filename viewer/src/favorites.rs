use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, StatusCode};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use log::debug;
use tokio::time::timeout;
use url::Url;

use crate::links::encode_component;
use crate::model::ComponentKey;

/// Remote registry of per-user favorites. Callers must not change any local
/// state until the registry acknowledges.
#[allow(async_fn_in_trait)]
pub trait FavoritesRegistry {
    async fn add(&self, key: &ComponentKey) -> Result<(), Error>;
    async fn remove(&self, key: &ComponentKey) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the favorites registry answered with status {0}")]
    Status(StatusCode),
    #[error("the request to the favorites registry timed out")]
    Timeout,
    #[error("couldn't reach the favorites registry")]
    Transport(#[source] anyhow::Error),
}

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Favorites registry spoken to over the application's REST API:
/// `POST {base}/api/favourites` with the key as form payload to add, and
/// `DELETE {base}/api/favourites/{key}` to remove.
pub struct HttpFavoritesRegistry {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
    request_timeout: Duration,
}

impl HttpFavoritesRegistry {
    pub fn new(base_url: Url) -> Self {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: Url, request_timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        let base_url = base_url.as_str().trim_end_matches('/').to_owned();

        Self {
            client,
            base_url,
            request_timeout,
        }
    }

    async fn perform(&self, request: Request<Full<Bytes>>) -> Result<(), Error> {
        let response = timeout(self.request_timeout, self.client.request(request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(|e| Error::Transport(e.into()))?;

        let status = response.status();
        // drain the body so the connection goes back to the pool
        let _ = response.collect().await;

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status(status))
        }
    }
}

impl FavoritesRegistry for HttpFavoritesRegistry {
    async fn add(&self, key: &ComponentKey) -> Result<(), Error> {
        debug!("adding {} to the favorites registry", key.value());

        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("{}/api/favourites", self.base_url))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Full::from(format!(
                "key={}",
                encode_component(key.value())
            )))
            .map_err(|e| Error::Transport(e.into()))?;

        self.perform(request).await
    }

    async fn remove(&self, key: &ComponentKey) -> Result<(), Error> {
        debug!("removing {} from the favorites registry", key.value());

        let request = Request::builder()
            .method(Method::DELETE)
            .uri(format!(
                "{}/api/favourites/{}",
                self.base_url,
                encode_component(key.value())
            ))
            .body(Full::default())
            .map_err(|e| Error::Transport(e.into()))?;

        self.perform(request).await
    }
}
