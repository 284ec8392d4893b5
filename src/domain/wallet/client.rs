//! Wallet sub-client.

use crate::client::NftmartClient;
use crate::domain::wallet::wire::GetMyWallet;
use crate::domain::wallet::UserWallet;
use crate::error::SdkError;

pub struct Wallets<'a> {
    pub(crate) client: &'a NftmartClient,
}

impl<'a> Wallets<'a> {
    /// The current user's wallet; empty when the backend knows no user.
    pub async fn get(&self) -> Result<UserWallet, SdkError> {
        let data = self
            .client
            .run::<GetMyWallet>((), self.client.fetch_policy())
            .await?;
        Ok(data.user.map(UserWallet::from).unwrap_or_default())
    }
}
