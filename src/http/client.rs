//! Low-level GraphQL-over-HTTP client: `GraphHttp`.
//!
//! Posts one operation per request and returns the raw `data` object. Decoding
//! into wire types and caching happen one layer up, in the sub-clients.

use crate::error::{GraphError, HttpError, SdkError};
use crate::graph::wire::{GraphResponse, QueryBody};
use crate::http::retry::RetryPolicy;

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client bound to one GraphQL endpoint.
#[derive(Clone)]
pub struct GraphHttp {
    endpoint: String,
    client: Client,
}

impl GraphHttp {
    #[allow(unused_variables)]
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one operation and return its `data` object.
    pub async fn execute<V: Serialize>(
        &self,
        body: &QueryBody<V>,
        retry: &RetryPolicy,
    ) -> Result<serde_json::Value, SdkError> {
        tracing::debug!(
            operation = body.operation_name,
            endpoint = %self.endpoint,
            "GraphQL request"
        );

        let response = self.post_with_retry(body, retry).await?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            return Err(GraphError::Errors(errors).into());
        }

        match response.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(GraphError::MissingData(body.operation_name.to_string()).into()),
        }
    }

    async fn post_with_retry<V: Serialize>(
        &self,
        body: &QueryBody<V>,
        retry: &RetryPolicy,
    ) -> Result<GraphResponse, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying GraphQL request to {}",
                            self.endpoint
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<V: Serialize>(
        &self,
        body: &QueryBody<V>,
    ) -> Result<GraphResponse, HttpError> {
        let resp = self.client.post(&self.endpoint).json(body).send().await?;
        let status = resp.status();

        // GraphQL servers report operation errors with a 200 or a 400 whose
        // body is still a GraphQL response.
        if status.is_success() {
            return Ok(resp.json::<GraphResponse>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        if status_code == 400 {
            if let Ok(parsed) = serde_json::from_str::<GraphResponse>(&body_text) {
                if parsed.errors.as_ref().is_some_and(|e| !e.is_empty()) {
                    return Ok(parsed);
                }
            }
        }

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            408 => Err(HttpError::Timeout),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
