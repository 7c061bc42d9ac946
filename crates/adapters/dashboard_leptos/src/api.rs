//! HTTP implementation of [`TrackerApi`] wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, RequestBuilder, Response};
use pkgtracker_app::config::ClientConfig;
use pkgtracker_app::error::ApiError;
use pkgtracker_app::ports::{CONTENT_TYPE, Endpoint, TrackerApi, is_success};
use pkgtracker_domain::id::PackageId;
use pkgtracker_domain::package::{NewPackage, Package};
use pkgtracker_domain::poll::PollAck;
use pkgtracker_domain::settings::Settings;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Browser `fetch` client for the tracking server.
#[derive(Debug, Clone, Default)]
pub struct HttpTrackerApi {
    config: ClientConfig,
}

impl HttpTrackerApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, endpoint: Endpoint<'_>) -> String {
        self.config.endpoint(&endpoint.path())
    }

    /// Bodiless request; still announces a JSON content type like every call.
    fn bare(&self, builder: fn(&str) -> RequestBuilder, endpoint: Endpoint<'_>) -> RequestBuilder {
        let (name, value) = CONTENT_TYPE;
        builder(&self.url(endpoint)).header(name, value)
    }

    fn with_body<T: Serialize + ?Sized>(
        &self,
        builder: fn(&str) -> RequestBuilder,
        endpoint: Endpoint<'_>,
        body: &T,
    ) -> Result<Request, ApiError> {
        self.bare(builder, endpoint)
            .json(body)
            .map_err(|err| ApiError::Transport(format!("failed to encode request body: {err}")))
    }
}

/// Send once and turn non-2xx responses into [`ApiError::RequestFailed`].
async fn send(request: Request) -> Result<Response, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    check_response(resp).await
}

/// Check the HTTP response status and extract the raw body if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if is_success(status) {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|err| ApiError::Transport(err.to_string()))
}

impl TrackerApi for HttpTrackerApi {
    fn get_settings(&self) -> impl Future<Output = Result<Settings, ApiError>> {
        let request = build(self.bare(Request::get, Endpoint::Settings));
        async move { read_json(send(request?).await?).await }
    }

    fn save_settings(&self, settings: &Settings) -> impl Future<Output = Result<(), ApiError>> {
        let request = self.with_body(Request::post, Endpoint::Settings, settings);
        async move {
            send(request?).await?;
            Ok(())
        }
    }

    fn list_packages(&self) -> impl Future<Output = Result<Vec<Package>, ApiError>> {
        let request = build(self.bare(Request::get, Endpoint::Packages));
        async move { read_json(send(request?).await?).await }
    }

    fn add_package(&self, package: &NewPackage) -> impl Future<Output = Result<(), ApiError>> {
        let request = self.with_body(Request::post, Endpoint::Packages, package);
        async move {
            send(request?).await?;
            Ok(())
        }
    }

    fn delete_package(&self, id: &PackageId) -> impl Future<Output = Result<(), ApiError>> {
        let request = build(self.bare(Request::delete, Endpoint::Package(id)));
        async move {
            send(request?).await?;
            Ok(())
        }
    }

    fn trigger_poll(&self) -> impl Future<Output = Result<PollAck, ApiError>> {
        let request = build(self.bare(Request::post, Endpoint::TriggerPoll));
        async move {
            let resp = send(request?).await?;
            // The acknowledgement shape is informational only.
            let text = resp.text().await.unwrap_or_default();
            Ok(serde_json::from_str(&text).unwrap_or_default())
        }
    }
}
