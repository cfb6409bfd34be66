use crate::config::Config;
use crate::error::Result;
use crate::nlp::VectorTable;
use anyhow::Context as _;
use reqwest::Client;
use tracing::info;

/// Terms sent per embeddings request.
const BATCH_SIZE: usize = 128;

/// Client for an OpenAI-compatible `/embeddings` endpoint.
///
/// Disabled when no endpoint is configured; callers then rank with the
/// analyzer's local vectors.
#[derive(Clone)]
pub struct EmbedService {
    client: Client,
    api_url: Option<String>,
    api_key: Option<String>,
    model: String,
}

impl EmbedService {
    pub fn new(config: &Config, client: Client) -> Self {
        let api_url = config
            .embedding_api_url
            .clone()
            .filter(|url| !url.trim().is_empty());

        if let Some(ref url) = api_url {
            info!(url = %url, model = %config.embedding_model, "model embeddings enabled");
        } else {
            info!("model embeddings disabled (EMBEDDING_API_URL not set), using hashed vectors");
        }

        Self {
            client,
            api_url,
            api_key: config.embedding_api_key.clone(),
            model: config.embedding_model.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_url.is_some()
    }

    pub async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        #[derive(serde::Serialize)]
        struct EmbReq<'a> {
            model: &'a str,
            input: &'a [String],
        }
        #[derive(serde::Deserialize)]
        struct EmbData {
            embedding: Vec<f32>,
        }
        #[derive(serde::Deserialize)]
        struct EmbResp {
            data: Vec<EmbData>,
        }

        let Some(url) = self.api_url.as_deref() else {
            return Ok(Vec::new());
        };
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = EmbReq {
            model: &self.model,
            input: texts,
        };
        let mut request = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(&body);
        if let Some(key) = self.api_key.as_deref() {
            request = request.bearer_auth(key);
        }
        let resp = request.send().await.context("embeddings request failed")?;

        let status = resp.status();
        let txt = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(anyhow::anyhow!("embeddings status {}: {}", status.as_u16(), txt).into());
        }
        let parsed: EmbResp = serde_json::from_str(&txt).context("embeddings parse failed")?;
        if parsed.data.len() != texts.len() {
            return Err(anyhow::anyhow!(
                "embeddings returned {} vectors for {} inputs",
                parsed.data.len(),
                texts.len()
            )
            .into());
        }
        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Embeds every term in batches. Any failure yields an empty table so
    /// generation falls back to local vectors.
    pub async fn embed_terms(&self, terms: Vec<String>) -> VectorTable {
        if !self.is_enabled() || terms.is_empty() {
            return VectorTable::default();
        }

        let mut vectors = Vec::with_capacity(terms.len());
        for batch in terms.chunks(BATCH_SIZE) {
            match self.embed_texts(batch).await {
                Ok(batch_vectors) => vectors.extend(batch_vectors),
                Err(e) => {
                    tracing::warn!(error = %e, terms = terms.len(), "embedding failed, using hashed vectors");
                    return VectorTable::default();
                }
            }
        }
        tracing::debug!(terms = terms.len(), "embedded candidate terms");
        VectorTable::from_pairs(terms.into_iter().zip(vectors))
    }
}
