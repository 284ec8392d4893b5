//! Client factory: `NftmartClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This module
//! keeps the builder, the per-instance response cache, and the one code path
//! every query goes through.

use crate::domain::asset::client::Assets;
use crate::domain::collection::client::Collections;
use crate::domain::wallet::client::Wallets;
use crate::error::SdkError;
use crate::graph::query::PagedOperation;
use crate::graph::wire::GraphQLQuery;
use crate::graph::{CacheKey, FetchPolicy, InMemoryCache};
use crate::http::{GraphHttp, RetryPolicy};
use crate::shared::Page;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::collection::client::Collections as CollectionsClient;
pub use crate::domain::wallet::client::Wallets as WalletClient;

/// The primary entry point: a GraphQL client bound to one endpoint with its
/// own in-memory cache.
///
/// Clones share the cache. Building another client never does.
#[derive(Clone)]
pub struct NftmartClient {
    pub(crate) http: GraphHttp,
    pub(crate) cache: Arc<RwLock<InMemoryCache>>,
    pub(crate) fetch_policy: FetchPolicy,
    pub(crate) retry: RetryPolicy,
}

impl NftmartClient {
    pub fn builder() -> NftmartClientBuilder {
        NftmartClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections { client: self }
    }

    pub fn wallet(&self) -> Wallets<'_> {
        Wallets { client: self }
    }

    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        self.fetch_policy
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }

    // ── Query execution ──────────────────────────────────────────────────

    /// Run one operation through the cache and the transport.
    pub(crate) async fn run<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        policy: FetchPolicy,
    ) -> Result<Q::ResponseData, SdkError> {
        let body = Q::build_query(variables);
        let operation = body.operation_name;
        let key = CacheKey::new(operation, &serde_json::to_value(&body.variables)?);

        let cached = if policy.reads_cache() {
            self.cache.read().await.read(&key)
        } else {
            None
        };

        let data = match cached {
            Some(hit) => {
                tracing::debug!(operation, "Cache hit");
                hit
            }
            None => {
                let data = self.http.execute(&body, &self.retry).await?;
                if policy.writes_cache() {
                    self.cache.write().await.write(key, data.clone());
                }
                data
            }
        };

        Ok(serde_json::from_value(data)?)
    }

    pub(crate) async fn fetch_page<O: PagedOperation>(
        &self,
        vars: &O::Vars,
        policy: FetchPolicy,
    ) -> Result<Page<O::Item>, SdkError> {
        let data = self.run::<O::Query>(vars.clone(), policy).await?;
        O::decode(data)
    }
}

/// Client against the application's configured endpoint.
pub fn get_client() -> NftmartClient {
    NftmartClientBuilder::default().build()
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Options merged over the defaults by [`NftmartClientBuilder::build`].
#[derive(Debug, Clone)]
pub struct NftmartClientBuilder {
    endpoint: String,
    fetch_policy: FetchPolicy,
    retry: RetryPolicy,
    timeout: Duration,
}

impl Default for NftmartClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: crate::network::DEFAULT_GRAPH_URL.to_string(),
            fetch_policy: FetchPolicy::default(),
            retry: RetryPolicy::None,
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NftmartClientBuilder {
    /// Defaults, with the endpoint taken from `NFTMART_GRAPH_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(crate::network::GRAPH_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.endpoint(url.trim()),
            _ => builder,
        }
    }

    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    pub fn fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.fetch_policy = policy;
        self
    }

    /// Opt into transport retries. Queries run once by default.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client with a fresh cache.
    pub fn build(self) -> NftmartClient {
        NftmartClient {
            http: GraphHttp::new(&self.endpoint, self.timeout),
            cache: Arc::new(RwLock::new(InMemoryCache::new())),
            fetch_policy: self.fetch_policy,
            retry: self.retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_uses_default_endpoint() {
        let client = get_client();
        assert_eq!(client.endpoint(), crate::network::DEFAULT_GRAPH_URL);
        assert_eq!(client.fetch_policy(), FetchPolicy::CacheFirst);
        assert!(client.retry.config().is_none());
    }

    #[test]
    fn test_builder_options_override_defaults() {
        let client = NftmartClient::builder()
            .endpoint("http://localhost:4000/graphql/")
            .fetch_policy(FetchPolicy::NoCache)
            .build();
        assert_eq!(client.endpoint(), "http://localhost:4000/graphql");
        assert_eq!(client.fetch_policy(), FetchPolicy::NoCache);
    }

    #[test]
    fn test_each_client_gets_its_own_cache() {
        let a = get_client();
        let b = get_client();
        let a2 = a.clone();
        assert!(!Arc::ptr_eq(&a.cache, &b.cache));
        assert!(Arc::ptr_eq(&a.cache, &a2.cache));
    }
}
