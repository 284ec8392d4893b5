//! Application shell: provider stack, router, pages.

pub mod pages;
pub mod router;
pub mod shell;

pub use pages::{HomePage, WalletPage};
pub use router::{Route, Router};
pub use shell::{App, FooterView, Frame, HeaderView, Layer, NavLink, Page};
