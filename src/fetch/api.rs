// src/fetch/api.rs

use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};
use url::Url;

use super::{parse::parse_response, Downloader, FetchRequest, RawTable};
use crate::config::Config;
use crate::error::{AcsError, Result};

/// The service rejects requests for more than 50 fields, NAME included.
pub const MAX_VARIABLES_PER_CALL: usize = 49;

/// Blocking client for the Census Bureau data API.
pub struct ApiDownloader {
    client: Client,
    base: Url,
    api_key: Option<String>,
}

impl ApiDownloader {
    pub fn new(base: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| AcsError::Config(format!("api base `{}`: {}", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(AcsError::Config(format!("api base `{}` is not a base URL", base)));
        }
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| AcsError::Config(format!("building HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base, config.api_key.clone(), config.timeout())
    }

    /// `{base}/{year}/acs/{dataset}?get=NAME,{vars}&for={scope}:*[&key=..]`
    pub fn request_url(&self, request: &FetchRequest, variables: &[String]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| AcsError::Config(format!("api base `{}` is not a base URL", self.base)))?
            .pop_if_empty()
            .push(&request.year.to_string())
            .push("acs")
            .push(&request.dataset);

        let mut fields = Vec::with_capacity(variables.len() + 1);
        fields.push("NAME");
        fields.extend(variables.iter().map(String::as_str));

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("get", &fields.join(","))
                .append_pair("for", &request.scope.predicate());
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
        }
        Ok(url)
    }

    fn get_chunk(&self, request: &FetchRequest, variables: &[String]) -> Result<RawTable> {
        let url = self.request_url(request, variables)?;
        let external = |message: String| AcsError::ExternalCall {
            request: request.to_string(),
            message,
        };

        debug!(variables = variables.len(), "GET {}", request);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| external(format!("sending request: {}", e)))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(external(format!("non-success status {}", status)));
        }
        let body = resp
            .text()
            .map_err(|e| external(format!("reading body: {}", e)))?;

        parse_response(&body, variables)
    }
}

impl Downloader for ApiDownloader {
    #[instrument(level = "info", skip(self), fields(request = %request))]
    fn download(&self, request: &FetchRequest) -> Result<RawTable> {
        let start = Instant::now();
        let mut chunks = request.variables.chunks(MAX_VARIABLES_PER_CALL);
        let first = chunks
            .next()
            .ok_or_else(|| AcsError::InvalidTable("request has no variables".into()))?;

        let mut table = self.get_chunk(request, first)?;
        for chunk in chunks {
            table = table.widen(self.get_chunk(request, chunk)?)?;
        }

        info!(rows = table.num_rows(), elapsed = ?start.elapsed(), "downloaded");
        Ok(table)
    }
}
