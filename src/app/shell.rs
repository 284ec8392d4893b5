//! `App`: wires the data client, theme, router, translations, and wallet
//! account into one root, and dispatches locations to pages.

use crate::account::{AccountReader, AccountStore, WalletProvider};
use crate::app::pages::{HomePage, WalletPage};
use crate::app::router::{Route, Router};
use crate::client::{NftmartClient, NftmartClientBuilder};
use crate::error::SdkError;
use crate::shared::{Address, Lifetime};
use crate::ui::i18n::{Locale, Translator};
use crate::ui::sales_modal::{SalesSettingModal, SalesSettingProps};
use crate::ui::theme::Theme;

/// The nested layers of the shell, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    DataClient,
    Theme,
    Router,
    Translation,
    Header,
    Wallet,
    PageSwitch,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub links: Vec<NavLink>,
    pub account: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub text: String,
}

/// One render of the shell. `route` is `None` for unmapped locations, in
/// which case no page renders between header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: HeaderView,
    pub route: Option<Route>,
    pub footer: FooterView,
}

/// A mounted page.
pub enum Page {
    Home(HomePage),
    Wallet(WalletPage),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Wallet(_) => Route::Wallet,
        }
    }
}

pub struct App {
    client: NftmartClient,
    theme: Theme,
    router: Router,
    translator: Translator,
    accounts: AccountStore,
    lifetime: Lifetime,
}

impl App {
    pub const PROVIDER_ORDER: [Layer; 8] = [
        Layer::DataClient,
        Layer::Theme,
        Layer::Router,
        Layer::Translation,
        Layer::Header,
        Layer::Wallet,
        Layer::PageSwitch,
        Layer::Footer,
    ];

    pub fn new(client: NftmartClient) -> Self {
        Self {
            client,
            theme: Theme::default(),
            router: Router::new(),
            translator: Translator::default(),
            accounts: AccountStore::new(),
            lifetime: Lifetime::new(),
        }
    }

    /// App against the configured endpoint (`NFTMART_GRAPH_URL` or the default).
    pub fn from_env() -> Self {
        Self::new(NftmartClientBuilder::from_env().build())
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.translator = Translator::new(locale);
        self
    }

    // ── Contexts ─────────────────────────────────────────────────────────

    pub fn client(&self) -> &NftmartClient {
        &self.client
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn translator(&self) -> Translator {
        self.translator
    }

    pub fn accounts(&self) -> AccountReader {
        self.accounts.reader()
    }

    pub async fn connect_wallet<P: WalletProvider>(&self, provider: &P) -> Result<(), SdkError> {
        self.accounts.connect(provider).await?;
        Ok(())
    }

    pub fn disconnect_wallet(&self) {
        self.accounts.disconnect();
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn render(&self, location: &str) -> Frame {
        let route = self.router.resolve(location);
        let links = Route::ALL
            .into_iter()
            .map(|r| NavLink {
                label: self.translator.t(r.label_key()),
                path: r.path(),
                active: route == Some(r),
            })
            .collect();

        Frame {
            header: HeaderView {
                links,
                account: self.accounts.reader().address(),
            },
            route,
            footer: FooterView {
                text: self.translator.t("footer.copyright"),
            },
        }
    }

    /// Mount the page for `location`, issuing its queries. Unmapped
    /// locations and an unmounted shell mount nothing.
    pub async fn mount_page(&self, location: &str) -> Option<Page> {
        if self.lifetime.is_ended() {
            tracing::debug!(location, "Shell unmounted; not mounting a page");
            return None;
        }
        let route = self.router.resolve(location)?;
        tracing::debug!(?route, "Mounting page");
        let token = self.lifetime.token();
        Some(match route {
            Route::Home => Page::Home(HomePage::mount(&self.client, token).await),
            Route::Wallet => Page::Wallet(
                WalletPage::mount(&self.client, &self.accounts.reader(), token).await,
            ),
        })
    }

    /// Sales dialog for an asset detail view, bound to the active account.
    pub fn sales_modal(&self, props: SalesSettingProps) -> SalesSettingModal {
        SalesSettingModal::new(props, self.accounts.reader())
            .with_translator(self.translator)
            .with_theme(self.theme.clone())
    }

    /// Tear the shell down; results of queries still in flight are dropped.
    pub fn unmount(&self) {
        self.lifetime.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn app() -> App {
        App::new(
            NftmartClient::builder()
                .endpoint("http://127.0.0.1:9/graphql")
                .build(),
        )
    }

    #[test]
    fn test_provider_order() {
        assert_eq!(App::PROVIDER_ORDER[0], Layer::DataClient);
        assert_eq!(App::PROVIDER_ORDER[5], Layer::Wallet);
        assert_eq!(App::PROVIDER_ORDER[7], Layer::Footer);
    }

    #[test]
    fn test_render_marks_active_link() {
        let frame = app().render("#/wallet");
        assert_eq!(frame.route, Some(Route::Wallet));
        let active: Vec<_> = frame.header.links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "/wallet");
    }

    #[test]
    fn test_unknown_path_renders_no_page() {
        let frame = app().render("#/unknown");
        assert_eq!(frame.route, None);
        assert!(frame.header.links.iter().all(|l| !l.active));
        assert!(!frame.footer.text.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_mounts_nothing() {
        assert!(app().mount_page("/unknown").await.is_none());
    }

    #[tokio::test]
    async fn test_unmounted_shell_mounts_nothing() {
        let app = app();
        app.unmount();
        assert!(app.mount_page("/").await.is_none());
    }

    #[test]
    fn test_header_shows_connected_account() {
        let app = app();
        app.accounts.set(Some(Account::new("5Alice")));
        assert_eq!(
            app.render("/").header.account,
            Some(Address::from("5Alice"))
        );
    }
}
