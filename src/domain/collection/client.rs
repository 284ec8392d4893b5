//! Collections sub-client: public listing and the user's own collections.

use crate::client::NftmartClient;
use crate::domain::collection::wire::{
    CollectionsData, GetCollections, GetMyCollections, MyCollectionsVars,
};
use crate::domain::collection::{Collection, CollectionQueryVars, OwnedCollection};
use crate::error::SdkError;
use crate::graph::query::{PagedOperation, WatchQuery};
use crate::graph::FetchPolicy;
use crate::shared::{Address, Cursor, LifetimeToken, Page};

/// The `GetCollections` operation.
pub struct CollectionsOperation;

impl PagedOperation for CollectionsOperation {
    type Vars = CollectionQueryVars;
    type Item = Collection;

    type Query = GetCollections;

    const NAME: &'static str = "GetCollections";

    fn cursor(vars: &CollectionQueryVars) -> Cursor {
        Cursor::Offset(vars.offset)
    }

    fn with_cursor(vars: &CollectionQueryVars, cursor: Cursor) -> CollectionQueryVars {
        let offset = match cursor {
            Cursor::Offset(o) => o,
            Cursor::Page(p) => p.saturating_sub(1) * vars.limit,
        };
        CollectionQueryVars { offset, ..*vars }
    }

    fn page_size(vars: &CollectionQueryVars) -> usize {
        vars.limit as usize
    }

    fn decode(data: CollectionsData) -> Result<Page<Collection>, SdkError> {
        let items = data
            .collections
            .collections
            .into_iter()
            .map(Collection::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SdkError::Validation(e.to_string()))?;
        Ok(Page {
            items,
            has_more: data.collections.has_more,
        })
    }
}

/// Sub-client for collections.
pub struct Collections<'a> {
    pub(crate) client: &'a NftmartClient,
}

impl<'a> Collections<'a> {
    pub async fn list(&self, vars: CollectionQueryVars) -> Result<Page<Collection>, SdkError> {
        self.list_with(vars, self.client.fetch_policy()).await
    }

    pub async fn list_with(
        &self,
        vars: CollectionQueryVars,
        policy: FetchPolicy,
    ) -> Result<Page<Collection>, SdkError> {
        let mut page = self
            .client
            .fetch_page::<CollectionsOperation>(&vars, policy)
            .await?;
        page.truncate(vars.limit as usize);
        Ok(page)
    }

    pub fn watch(
        &self,
        vars: CollectionQueryVars,
        token: LifetimeToken,
    ) -> WatchQuery<CollectionsOperation> {
        WatchQuery::new(self.client.clone(), vars, token)
    }

    /// Collections owned by `user`.
    pub async fn mine(&self, user: &Address) -> Result<Page<OwnedCollection>, SdkError> {
        let vars = MyCollectionsVars { user: user.clone() };
        let data = self
            .client
            .run::<GetMyCollections>(vars, self.client.fetch_policy())
            .await?;
        let items = data
            .collections
            .collections
            .into_iter()
            .map(OwnedCollection::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SdkError::Validation(e.to_string()))?;
        Ok(Page {
            items,
            has_more: data.collections.has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offset_cursor_roundtrip_through_vars() {
        let vars = CollectionQueryVars::default();
        assert_eq!(CollectionsOperation::cursor(&vars), Cursor::Offset(0));
        let next = CollectionsOperation::with_cursor(&vars, Cursor::Offset(20));
        assert_eq!(next.offset, 20);
        assert_eq!(next.limit, 20);
    }

    #[test]
    fn test_decode_listing() {
        let data: CollectionsData = serde_json::from_value(json!({
            "collections": {
                "collections": [{"id": 1, "name": "Hashmasks"}, {"id": "2", "name": "CryptoPunks"}],
                "hasMore": true
            }
        }))
        .unwrap();
        let page = CollectionsOperation::decode(data).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, 2);
        assert!(page.has_more);
    }

    #[test]
    fn test_decode_rejects_non_numeric_id() {
        let data: CollectionsData = serde_json::from_value(json!({
            "collections": {"collections": [{"id": "x1", "name": "Hashmasks"}], "hasMore": false}
        }))
        .unwrap();
        let err = CollectionsOperation::decode(data).unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
