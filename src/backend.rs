// backend.rs
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::FrontendError;
use crate::recipe::{Recipe, RecipeSummary};

/// The external recipe service. Extraction and storage happen there.
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// POST /parse: create a recipe from a source URL
    async fn parse(&self, url: &str) -> Result<RecipeSummary, FrontendError>;

    /// GET /recipes/{id}
    async fn recipe(&self, id: &str) -> Result<Recipe, FrontendError>;
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    url: &'a str,
}

pub struct HttpBackend {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpBackend {
    pub fn new(base: reqwest::Url) -> Result<Self, FrontendError> {
        if base.cannot_be_a_base() {
            return Err(FrontendError::BackendUrl(base.to_string()));
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base })
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, FrontendError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FrontendError::BackendUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FrontendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FrontendError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    async fn parse(&self, url: &str) -> Result<RecipeSummary, FrontendError> {
        let endpoint = self.endpoint(&["parse"])?;
        tracing::debug!(%endpoint, %url, "submitting recipe url");
        let response = self
            .client
            .post(endpoint)
            .json(&ParseRequest { url })
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn recipe(&self, id: &str) -> Result<Recipe, FrontendError> {
        let endpoint = self.endpoint(&["recipes", id])?;
        tracing::debug!(%endpoint, "fetching recipe");
        let response = self.client.get(endpoint).send().await?;
        Self::read_json(response).await
    }
}
