//! Wallet domain: the connected user's wallet entries.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// One wallet entry of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
}

/// The `user.wallet` selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWallet {
    pub wallets: Vec<Wallet>,
    pub has_more: bool,
}

impl From<wire::UserResponse> for UserWallet {
    fn from(user: wire::UserResponse) -> Self {
        let wallets = match user.wallet {
            None => Vec::new(),
            Some(wire::OneOrMany::One(w)) => vec![w],
            Some(wire::OneOrMany::Many(ws)) => ws,
        };
        UserWallet {
            wallets: wallets.into_iter().map(|w| Wallet { id: w.id }).collect(),
            has_more: user.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_wallet_object() {
        let user: wire::UserResponse =
            serde_json::from_str(r#"{"wallet": {"id": 5}, "hasMore": false}"#).unwrap();
        let uw = UserWallet::from(user);
        assert_eq!(uw.wallets, vec![Wallet { id: "5".to_string() }]);
    }

    #[test]
    fn test_wallet_list_and_missing() {
        let user: wire::UserResponse =
            serde_json::from_str(r#"{"wallet": [{"id": "a"}, {"id": "b"}], "hasMore": true}"#)
                .unwrap();
        let uw = UserWallet::from(user);
        assert_eq!(uw.wallets.len(), 2);
        assert!(uw.has_more);

        let user: wire::UserResponse = serde_json::from_str(r#"{"wallet": null}"#).unwrap();
        assert!(UserWallet::from(user).wallets.is_empty());
    }
}
