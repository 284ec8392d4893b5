//! Page components: what each route loads on mount.

use crate::account::{Account, AccountReader};
use crate::client::NftmartClient;
use crate::domain::asset::{AssetQueryVars, AssetsOperation};
use crate::domain::collection::{CollectionQueryVars, CollectionsOperation, OwnedCollection};
use crate::domain::wallet::UserWallet;
use crate::graph::{QueryResult, WatchQuery};
use crate::shared::{LifetimeToken, Page};

/// Landing page: collection list and the first page of assets.
pub struct HomePage {
    pub collections: WatchQuery<CollectionsOperation>,
    pub assets: WatchQuery<AssetsOperation>,
}

impl HomePage {
    pub async fn mount(client: &NftmartClient, token: LifetimeToken) -> Self {
        let mut page = Self {
            collections: client
                .collections()
                .watch(CollectionQueryVars::default(), token.clone()),
            assets: client.assets().watch(AssetQueryVars::default(), token),
        };
        page.collections.start().await;
        page.assets.start().await;
        page
    }

    /// Narrow the asset grid to one collection, or back to everything.
    pub async fn select_collection(&mut self, collection_id: Option<i64>) -> bool {
        let vars = AssetQueryVars {
            collection_id,
            ..AssetQueryVars::default()
        };
        self.assets.set_variables(vars).await
    }
}

/// The connected user's wallet and collections.
pub struct WalletPage {
    pub account: Option<Account>,
    pub wallet: QueryResult<UserWallet>,
    pub collections: QueryResult<Page<OwnedCollection>>,
}

impl WalletPage {
    pub async fn mount(
        client: &NftmartClient,
        accounts: &AccountReader,
        token: LifetimeToken,
    ) -> Self {
        let account = accounts.current();
        let mut page = Self {
            account: account.clone(),
            wallet: QueryResult {
                loading: true,
                ..QueryResult::default()
            },
            collections: QueryResult::default(),
        };

        let wallet = client.wallet().get().await;
        let collections = match &account {
            Some(account) => Some(client.collections().mine(&account.address).await),
            None => None,
        };

        if !token.is_current() {
            tracing::warn!("Dropping wallet page data after unmount");
            return page;
        }

        page.wallet.loading = false;
        match wallet {
            Ok(w) => page.wallet.data = Some(w),
            Err(e) => page.wallet.error = Some(e),
        }
        match collections {
            Some(Ok(c)) => page.collections.data = Some(c),
            Some(Err(e)) => page.collections.error = Some(e),
            None => {}
        }
        page
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}
