//! Reactive query handles.
//!
//! A [`WatchQuery`] is what a page component holds for a paginated listing: it
//! exposes the current [`QueryResult`] (`data`, `loading`, `error`) and the
//! continuations that change it (`refetch`, `set_variables`, `fetch_more`).
//! Errors land in `QueryResult::error` and are never retried here.

use crate::client::NftmartClient;
use crate::error::SdkError;
use crate::graph::wire::GraphQLQuery;
use crate::graph::FetchPolicy;
use crate::shared::{Cursor, LifetimeToken, Page, Paginated};

use serde::Serialize;
use std::fmt;

/// A paginated GraphQL operation: its query, cursor handling and decoding.
pub trait PagedOperation {
    type Vars: Serialize + Clone + PartialEq + fmt::Debug;
    type Item: Clone;
    type Query: GraphQLQuery<Variables = Self::Vars>;

    /// Operation name; also the cache namespace.
    const NAME: &'static str;

    /// Cursor the variables point at.
    fn cursor(vars: &Self::Vars) -> Cursor;

    /// Same variables, moved to `cursor`.
    fn with_cursor(vars: &Self::Vars, cursor: Cursor) -> Self::Vars;

    fn page_size(vars: &Self::Vars) -> usize;

    /// Turn the operation's decoded `data` into a page.
    fn decode(
        data: <Self::Query as GraphQLQuery>::ResponseData,
    ) -> Result<Page<Self::Item>, SdkError>;
}

/// Snapshot of a query as seen by a consumer.
#[derive(Debug)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<SdkError>,
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> QueryResult<T> {
    pub fn is_ready(&self) -> bool {
        !self.loading && self.data.is_some()
    }
}

/// Live handle on a paginated listing.
pub struct WatchQuery<O: PagedOperation> {
    client: NftmartClient,
    vars: O::Vars,
    result: QueryResult<Paginated<O::Item>>,
    token: LifetimeToken,
}

impl<O: PagedOperation> WatchQuery<O> {
    pub(crate) fn new(client: NftmartClient, vars: O::Vars, token: LifetimeToken) -> Self {
        Self {
            client,
            vars,
            result: QueryResult::default(),
            token,
        }
    }

    pub fn variables(&self) -> &O::Vars {
        &self.vars
    }

    pub fn result(&self) -> &QueryResult<Paginated<O::Item>> {
        &self.result
    }

    /// Rows loaded so far, across every fetched page.
    pub fn items(&self) -> &[O::Item] {
        self.result.data.as_ref().map(|d| d.items()).unwrap_or(&[])
    }

    pub fn has_more(&self) -> bool {
        self.result.data.as_ref().is_some_and(|d| d.has_more())
    }

    /// Initial load ("mount"), honoring the client's fetch policy.
    pub async fn start(&mut self) -> &QueryResult<Paginated<O::Item>> {
        let policy = self.client.fetch_policy();
        self.load_first(policy).await;
        &self.result
    }

    /// Reload the first page from the network, discarding fetched pages.
    pub async fn refetch(&mut self) -> &QueryResult<Paginated<O::Item>> {
        self.load_first(FetchPolicy::NetworkOnly).await;
        &self.result
    }

    /// Replace the variables. Reloads only when they actually changed;
    /// returns whether a reload happened.
    pub async fn set_variables(&mut self, vars: O::Vars) -> bool {
        if vars == self.vars {
            return false;
        }
        self.vars = vars;
        self.result.data = None;
        let policy = self.client.fetch_policy();
        self.load_first(policy).await;
        true
    }

    /// Fetch the page after the last loaded one and append it.
    ///
    /// Returns `false` without a request when nothing is loaded yet, a request
    /// is in flight, or the listing is complete.
    pub async fn fetch_more(&mut self) -> bool {
        if self.result.loading {
            return false;
        }
        let Some(cursor) = self.result.data.as_ref().and_then(|d| d.next_cursor()) else {
            return false;
        };
        if !self.token.is_current() {
            tracing::debug!(operation = O::NAME, "Query torn down; not fetching more");
            return false;
        }

        let vars = O::with_cursor(&self.vars, cursor);
        self.result.loading = true;
        let outcome = self
            .client
            .fetch_page::<O>(&vars, self.client.fetch_policy())
            .await;

        self.result.loading = false;
        if !self.token.is_current() {
            tracing::warn!(operation = O::NAME, "Dropping page for a torn-down query");
            return true;
        }

        match outcome {
            Ok(page) => {
                if let Some(listing) = self.result.data.as_mut() {
                    if let Err(e) = listing.accept(cursor, page) {
                        tracing::warn!(operation = O::NAME, "Ignoring page: {}", e);
                    }
                }
                self.result.error = None;
            }
            Err(e) => self.result.error = Some(e),
        }
        true
    }

    async fn load_first(&mut self, policy: FetchPolicy) {
        if !self.token.is_current() {
            tracing::debug!(operation = O::NAME, "Query torn down; not loading");
            return;
        }
        let vars = self.vars.clone();
        self.result.loading = true;
        let outcome = self.client.fetch_page::<O>(&vars, policy).await;

        self.result.loading = false;
        if !self.token.is_current() {
            tracing::warn!(operation = O::NAME, "Dropping result for a torn-down query");
            return;
        }

        match outcome {
            Ok(page) => {
                let cursor = O::cursor(&vars);
                let mut listing = Paginated::new(cursor, O::page_size(&vars));
                match listing.accept(cursor, page) {
                    Ok(()) => {
                        self.result.data = Some(listing);
                        self.result.error = None;
                    }
                    Err(e) => self.result.error = Some(SdkError::Other(e.to_string())),
                }
            }
            Err(e) => self.result.error = Some(e),
        }
    }
}
