//! Translation lookup. Missing keys render as the key itself.

use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Parse a language tag such as `zh-CN` or `en_US`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

type Bundle = HashMap<&'static str, &'static str>;

static EN: OnceLock<Bundle> = OnceLock::new();
static ZH: OnceLock<Bundle> = OnceLock::new();

const EN_ENTRIES: &[(&str, &str)] = &[
    ("header.home", "Home"),
    ("header.wallet", "Wallet"),
    ("footer.copyright", "© NFTMart"),
    ("detail.modal.sales-setting.title", "Sales Setting"),
    ("price", "Price"),
    ("price.subtitle", "Listing price of the asset"),
    ("category", "Category"),
    ("category.subtitle", "Where the listing appears"),
    ("pledge", "Pledge"),
    ("pledge.subtitle", "Deposit backing the listing"),
    ("expiration", "Expiration"),
    ("confirm", "Confirm"),
];

const ZH_ENTRIES: &[(&str, &str)] = &[
    ("header.home", "首页"),
    ("header.wallet", "钱包"),
    ("footer.copyright", "© NFTMart"),
    ("detail.modal.sales-setting.title", "出售设置"),
    ("price", "价格"),
    ("price.subtitle", "资产的挂单价格"),
    ("category", "分类"),
    ("category.subtitle", "挂单展示的分类"),
    ("pledge", "质押"),
    ("pledge.subtitle", "挂单的质押金额"),
    ("expiration", "过期时间"),
    ("confirm", "确认"),
];

fn bundle(locale: Locale) -> &'static Bundle {
    match locale {
        Locale::En => EN.get_or_init(|| EN_ENTRIES.iter().copied().collect()),
        Locale::Zh => ZH.get_or_init(|| ZH_ENTRIES.iter().copied().collect()),
    }
}

/// Key → text for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn t(&self, key: &str) -> String {
        bundle(self.locale)
            .get(key)
            .map(|s| s.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let en = Translator::new(Locale::En);
        assert_eq!(en.t("price"), "Price");
        assert_eq!(en.t("Hashmasks"), "Hashmasks");
        let zh = Translator::new(Locale::Zh);
        assert_eq!(zh.t("confirm"), "确认");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("en_US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_bundles_cover_same_keys() {
        let en: Vec<_> = EN_ENTRIES.iter().map(|(k, _)| *k).collect();
        let zh: Vec<_> = ZH_ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, zh);
    }
}
