//! Assets sub-client: paginated listing, one-shot or watched.

use crate::client::NftmartClient;
use crate::domain::asset::wire::{AssetsData, GetItems};
use crate::domain::asset::{self, Asset, AssetQueryVars};
use crate::error::SdkError;
use crate::graph::query::{PagedOperation, WatchQuery};
use crate::graph::FetchPolicy;
use crate::shared::{Cursor, LifetimeToken, Lifetime, Page};

/// The `GetItems` operation.
pub struct AssetsOperation;

impl PagedOperation for AssetsOperation {
    type Vars = AssetQueryVars;
    type Item = Asset;

    type Query = GetItems;

    const NAME: &'static str = "GetItems";

    fn cursor(vars: &AssetQueryVars) -> Cursor {
        Cursor::Page(vars.page)
    }

    fn with_cursor(vars: &AssetQueryVars, cursor: Cursor) -> AssetQueryVars {
        let page = match cursor {
            Cursor::Page(p) => p,
            // Offsets translate to the page that contains them.
            Cursor::Offset(o) => o / vars.page_size.max(1) + 1,
        };
        AssetQueryVars {
            page,
            ..vars.clone()
        }
    }

    fn page_size(vars: &AssetQueryVars) -> usize {
        vars.page_size as usize
    }

    fn decode(data: AssetsData) -> Result<Page<Asset>, SdkError> {
        let items = data
            .assets
            .assets
            .into_iter()
            .map(Asset::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e: asset::ValidationError| SdkError::Validation(e.to_string()))?;
        Ok(Page {
            items,
            has_more: data.assets.has_more,
        })
    }
}

/// Sub-client for asset listings.
pub struct Assets<'a> {
    pub(crate) client: &'a NftmartClient,
}

impl<'a> Assets<'a> {
    /// Fetch one page with the client's fetch policy.
    pub async fn list(&self, vars: AssetQueryVars) -> Result<Page<Asset>, SdkError> {
        self.list_with(vars, self.client.fetch_policy()).await
    }

    pub async fn list_with(
        &self,
        vars: AssetQueryVars,
        policy: FetchPolicy,
    ) -> Result<Page<Asset>, SdkError> {
        let mut page = self.client.fetch_page::<AssetsOperation>(&vars, policy).await?;
        page.truncate(vars.page_size as usize);
        Ok(page)
    }

    /// Live listing handle, not yet loaded. Call `start()` to mount it.
    pub fn watch(&self, vars: AssetQueryVars, token: LifetimeToken) -> WatchQuery<AssetsOperation> {
        WatchQuery::new(self.client.clone(), vars, token)
    }

    /// Live listing handle that lives as long as `lifetime`.
    pub fn watch_in(
        &self,
        vars: AssetQueryVars,
        lifetime: &Lifetime,
    ) -> WatchQuery<AssetsOperation> {
        self.watch(vars, lifetime.token())
    }

    /// Drop cached asset pages.
    pub async fn invalidate(&self) {
        self.client
            .cache
            .write()
            .await
            .evict_operation(AssetsOperation::NAME);
    }
}
