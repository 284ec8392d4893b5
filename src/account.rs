//! Active wallet account, shared without prop drilling.
//!
//! [`AccountStore`] is the single writer and is owned by the wallet layer.
//! Components get an [`AccountReader`], which is cheap to clone and read-only.

use crate::error::SdkError;
use crate::shared::Address;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// An account exposed by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }
}

/// The wallet extension / signer the app connects to.
pub trait WalletProvider {
    /// Accounts the user has authorized, in the wallet's order.
    fn accounts(&self) -> impl Future<Output = Result<Vec<Account>, SdkError>>;
}

#[derive(Debug, Default)]
struct Shared {
    account: RwLock<Option<Account>>,
    version: AtomicU64,
}

/// Writer side of the active account.
#[derive(Debug, Default)]
pub struct AccountStore {
    shared: Arc<Shared>,
}

/// Read-only view of the active account.
#[derive(Debug, Clone)]
pub struct AccountReader {
    shared: Arc<Shared>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> AccountReader {
        AccountReader {
            shared: self.shared.clone(),
        }
    }

    pub fn set(&self, account: Option<Account>) {
        let mut slot = self
            .shared
            .account
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = account;
        self.shared.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Ask the provider for its accounts and make the first one active.
    pub async fn connect<P: WalletProvider>(
        &self,
        provider: &P,
    ) -> Result<Option<Account>, SdkError> {
        let accounts = provider.accounts().await?;
        let active = accounts.into_iter().next();
        match &active {
            Some(account) => tracing::info!(address = %account.address, "Wallet connected"),
            None => tracing::warn!("Wallet provider returned no accounts"),
        }
        self.set(active.clone());
        Ok(active)
    }

    pub fn disconnect(&self) {
        self.set(None);
    }
}

impl AccountReader {
    pub fn current(&self) -> Option<Account> {
        self.shared
            .account
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn address(&self) -> Option<Address> {
        self.current().map(|a| a.address)
    }

    /// Bumped on every write; lets views detect a change cheaply.
    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWallet(Vec<Account>);

    impl WalletProvider for FixedWallet {
        async fn accounts(&self) -> Result<Vec<Account>, SdkError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_readers_see_writer_updates() {
        let store = AccountStore::new();
        let reader = store.reader();
        assert!(reader.current().is_none());

        store.set(Some(Account::new("5Alice")));
        assert_eq!(reader.address(), Some(Address::from("5Alice")));
        assert_eq!(reader.version(), 1);

        store.disconnect();
        assert!(reader.current().is_none());
        assert_eq!(reader.version(), 2);
    }

    #[tokio::test]
    async fn test_connect_picks_first_account() {
        let store = AccountStore::new();
        let wallet = FixedWallet(vec![Account::new("5Alice"), Account::new("5Bob")]);
        let active = store.connect(&wallet).await.unwrap();
        assert_eq!(active.unwrap().address, Address::from("5Alice"));
        assert_eq!(store.reader().address(), Some(Address::from("5Alice")));
    }

    #[tokio::test]
    async fn test_connect_without_accounts_clears() {
        let store = AccountStore::new();
        store.set(Some(Account::new("5Old")));
        let active = store.connect(&FixedWallet(vec![])).await.unwrap();
        assert!(active.is_none());
        assert!(store.reader().current().is_none());
    }
}
