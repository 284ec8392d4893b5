//! Network URL constants for the NFTMart client.

/// Default GraphQL endpoint (the application's configured `DBURL`).
pub const DEFAULT_GRAPH_URL: &str = "https://api.nftmart.io/graphql";

/// Environment variable that overrides [`DEFAULT_GRAPH_URL`] in
/// `NftmartClientBuilder::from_env`.
pub const GRAPH_URL_ENV: &str = "NFTMART_GRAPH_URL";

/// Default per-request timeout in seconds (native only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
