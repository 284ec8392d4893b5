//! Shared newtypes and utilities used across all domain modules.
//!
//! The identifier newtypes are serialization-transparent: they serialize as the
//! plain string the backend and the order API expect, and accept either a string
//! or an integer on the way in (GraphQL `ID` scalars arrive as both).

pub mod lifetime;
pub mod pagination;
pub mod serde_util;

pub use lifetime::{Lifetime, LifetimeToken};
pub use pagination::{Cursor, Page, Paginated, PaginationError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                serde_util::string_or_number::deserialize(deserializer).map(Self)
            }
        }
    };
}

string_id!(
    /// A wallet account address (SS58 string as handed out by the wallet).
    Address
);

string_id!(
    /// Backend identifier of an asset.
    AssetId
);

string_id!(
    /// On-chain class identifier of an asset.
    ClassId
);

string_id!(
    /// On-chain token identifier within a class.
    TokenId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_serializes_as_plain_string() {
        let addr = Address::new("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY\"");
    }

    #[test]
    fn test_asset_id_accepts_integer() {
        let id: AssetId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
        let id: AssetId = serde_json::from_str("\"a-42\"").unwrap();
        assert_eq!(id, AssetId::from("a-42"));
    }

    #[test]
    fn test_ids_reject_objects() {
        assert!(serde_json::from_str::<ClassId>("{}").is_err());
    }
}
