use reqwest::Url;
use serde::Deserialize;

use crate::{
    ClientConfig,
    error::{ApiError, ConfigError},
};

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the expense backend.
///
/// One instance serves both the lookup calls and the submission pipeline;
/// everything it needs comes from the [`ClientConfig`] handed to
/// [`ApiClient::new`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Url::parse(&config.base_url).map_err(|err| ConfigError::BaseUrl(err.to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn error_for(resp: reqwest::Response) -> ApiError {
        let status = resp.status();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "server error".to_string(),
        };
        ApiError::Server { status, message }
    }

    pub(crate) async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        if resp.status().is_success() {
            return Ok(resp.json::<T>().await?);
        }
        Err(Self::error_for(resp).await)
    }

    pub(crate) async fn post_json_unit<TReq: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<(), ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        if resp.status().is_success() {
            return Ok(());
        }
        Err(Self::error_for(resp).await)
    }
}
