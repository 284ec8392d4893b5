//! # NFTMart SDK
//!
//! Client-side core of the NFTMart collectible marketplace, for native and
//! WASM front-ends.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared newtypes, pagination, domain models (always available)
//! 2. **GraphQL**: Operation documents, response cache, reactive query handles
//! 3. **HTTP**: `GraphHttp` transport with opt-in retry policies
//! 4. **Client**: `NftmartClient` with per-domain sub-clients
//! 5. **UI state**: Account store, toasts, translations, the sales dialog
//! 6. **Shell**: `App`: provider stack, router, pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nftmart_sdk::prelude::*;
//!
//! let client = NftmartClient::builder()
//!     .endpoint("https://api.nftmart.io/graphql")
//!     .build();
//!
//! let page = client.assets().list(AssetQueryVars::default().in_collection(3)).await?;
//! let mut listing = client.collections().watch(CollectionQueryVars::default(), token);
//! listing.start().await;
//! listing.fetch_more().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, pagination, and component lifetimes.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint constants.
pub mod network;

// ── Layer 2: GraphQL ─────────────────────────────────────────────────────────

/// Operation documents, envelopes, cache, watch queries.
pub mod graph;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// GraphQL-over-HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Client ──────────────────────────────────────────────────────────

/// `NftmartClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: UI state ────────────────────────────────────────────────────────

/// Active wallet account shared across components.
pub mod account;

/// Toasts, theme, translations, sales dialog.
pub mod ui;

// ── Layer 6: Shell ───────────────────────────────────────────────────────────

/// Application shell: router and pages.
#[cfg(feature = "http")]
pub mod app;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        Address, AssetId, ClassId, Cursor, Lifetime, LifetimeToken, Page, Paginated, TokenId,
    };

    // Domain types
    pub use crate::domain::asset::{Asset, AssetQueryVars};
    pub use crate::domain::collection::{Collection, CollectionQueryVars, OwnedCollection};
    pub use crate::domain::order::{OrderCreator, OrderParams, OrderReceipt};
    pub use crate::domain::wallet::{UserWallet, Wallet};

    // Errors
    pub use crate::error::{GraphError, HttpError, OrderError, SdkError};

    // Network
    pub use crate::network::DEFAULT_GRAPH_URL;

    // GraphQL
    pub use crate::graph::FetchPolicy;

    // Client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        get_client, AssetsClient, CollectionsClient, NftmartClient, NftmartClientBuilder,
        WalletClient,
    };
    #[cfg(feature = "http")]
    pub use crate::graph::{QueryResult, WatchQuery};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // UI state
    pub use crate::account::{Account, AccountReader, AccountStore, WalletProvider};
    pub use crate::ui::{
        Locale, ModalState, SalesSettingModal, SalesSettingProps, SubmitOutcome, Theme, Toasts,
        Translator,
    };

    // Shell
    #[cfg(feature = "http")]
    pub use crate::app::{App, Frame, Route};
}
