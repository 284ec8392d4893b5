//! GraphQL layer: operation documents, envelopes, response cache, and
//! reactive query handles.

pub mod cache;
#[cfg(feature = "http")]
pub mod query;
pub mod wire;

pub use cache::{CacheKey, FetchPolicy, InMemoryCache};
#[cfg(feature = "http")]
pub use query::{PagedOperation, QueryResult, WatchQuery};

/// The connected user's wallet.
pub const GET_MY_WALLET: &str = r#"
query GetMyWallet {
  user {
    wallet {
      id
    }
    hasMore
  }
}
"#;

/// Collections owned by one user (category references only).
pub const GET_MY_COLLECTIONS: &str = r#"
query GetMyCollections($user: String) {
  collections(user: $user) {
    collections {
      categoryId
    }
    hasMore
  }
}
"#;

/// All collections, offset-paginated.
pub const GET_COLLECTIONS: &str = r#"
query GetCollections($offset: Int, $limit: Int) {
  collections(offset: $offset, limit: $limit) {
    collections {
      name
      id
    }
    hasMore
  }
}
"#;

/// Assets, page-paginated and filterable.
pub const GET_ITEMS: &str = r#"
query GetItems($page: Int, $pageSize: Int, $collectionId: Int, $categoryId: Int, $status: Int) {
  assets(
    page: $page
    pageSize: $pageSize
    collectionId: $collectionId
    status: $status
    categoryId: $categoryId
  ) {
    assets {
      id
      name
      picUrl
      price
      status
      categoryId
      collectionId
    }
    hasMore
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_declare_their_operation_names() {
        assert!(GET_MY_WALLET.contains("query GetMyWallet"));
        assert!(GET_MY_COLLECTIONS.contains("query GetMyCollections"));
        assert!(GET_COLLECTIONS.contains("query GetCollections"));
        assert!(GET_ITEMS.contains("query GetItems"));
    }

    #[test]
    fn test_items_document_selects_has_more() {
        assert!(GET_ITEMS.contains("hasMore"));
        assert!(GET_ITEMS.contains("$pageSize: Int"));
    }
}
