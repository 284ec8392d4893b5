//! "List asset for sale" dialog.
//!
//! States: `Closed → Open → Submitting → Closed`. The parent controls
//! visibility through [`SalesSettingModal::set_open`]; the modal closes itself
//! once an order attempt resolves, either way, and reports that through the
//! optional close callback.
//!
//! Submission is split so a UI can render the submitting state in between:
//! [`begin_submit`](SalesSettingModal::begin_submit) validates and hands out a
//! [`PendingOrder`], [`complete`](SalesSettingModal::complete) applies the
//! outcome. [`submit`](SalesSettingModal::submit) does both around one
//! `create_order` call.

use crate::account::AccountReader;
use crate::domain::order::{OrderCreator, OrderParams, OrderReceipt};
use crate::error::OrderError;
use crate::shared::{ClassId, Lifetime, LifetimeToken, TokenId};
use crate::ui::i18n::Translator;
use crate::ui::sales_form::{Field, FieldError, SalesForm, SalesSettingSchema};
use crate::ui::theme::Theme;
use crate::ui::toast::{ToastStatus, Toasts};

use rust_decimal::Decimal;
use std::fmt;

pub const TITLE_KEY: &str = "detail.modal.sales-setting.title";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
    Submitting,
}

/// What the parent supplies when mounting the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSettingProps {
    /// Category label keys; the form stores the chosen index.
    pub categories: Vec<String>,
    pub class_id: ClassId,
    pub token_id: TokenId,
}

/// Why a submit attempt did not produce an order.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    NotOpen,
    AlreadySubmitting,
    Invalid(Vec<FieldError>),
    NoAccount,
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocked::NotOpen => write!(f, "Modal is not open"),
            SubmitBlocked::AlreadySubmitting => write!(f, "A submission is in flight"),
            SubmitBlocked::Invalid(errors) => match errors.first() {
                Some(first) => write!(f, "{}", first.message),
                None => write!(f, "Invalid form"),
            },
            SubmitBlocked::NoAccount => write!(f, "{}", OrderError::NoAccount),
        }
    }
}

/// A validated order waiting for the order API.
#[derive(Debug, Clone)]
pub struct PendingOrder {
    pub params: OrderParams,
    token: LifetimeToken,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Succeeded(OrderReceipt),
    Failed(OrderError),
    /// The modal was closed or torn down before the result arrived.
    Discarded,
}

/// One radio option of the category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub index: u32,
    pub label: String,
    pub selected: bool,
}

/// Everything a renderer needs for one frame of the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesModalView {
    pub is_open: bool,
    pub title: String,
    pub banner: Option<String>,
    pub banner_color: String,
    pub price: Option<Decimal>,
    pub pledge: Option<Decimal>,
    pub categories: Vec<CategoryOption>,
    pub field_errors: Vec<FieldError>,
    pub expiration_enabled: bool,
    pub confirm_label: String,
    pub is_loading: bool,
}

type CloseCallback = Box<dyn FnMut() + Send>;

pub struct SalesSettingModal {
    props: SalesSettingProps,
    form: SalesForm,
    state: ModalState,
    account: AccountReader,
    toasts: Toasts,
    translator: Translator,
    theme: Theme,
    expiration_enabled: bool,
    lifetime: Lifetime,
    on_close: Option<CloseCallback>,
}

impl SalesSettingModal {
    pub fn new(props: SalesSettingProps, account: AccountReader) -> Self {
        let schema = SalesSettingSchema {
            category_count: Some(props.categories.len()),
        };
        Self {
            props,
            form: SalesForm::new(schema),
            state: ModalState::Closed,
            account,
            toasts: Toasts::new(),
            translator: Translator::default(),
            theme: Theme::default(),
            expiration_enabled: false,
            lifetime: Lifetime::new(),
            on_close: None,
        }
    }

    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Called whenever the modal closes itself.
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    // ── Visibility ───────────────────────────────────────────────────────

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// Parent-controlled visibility. Closing discards the form state and
    /// any result still in flight.
    pub fn set_open(&mut self, open: bool) {
        match (open, self.state) {
            (true, ModalState::Closed) => self.state = ModalState::Open,
            (false, ModalState::Open | ModalState::Submitting) => self.close_silently(),
            _ => {}
        }
    }

    /// The user dismissed the dialog (close button or overlay).
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    /// Tear the component down; outstanding results are dropped.
    pub fn unmount(&mut self) {
        self.lifetime.end();
        self.state = ModalState::Closed;
    }

    // ── Form access ──────────────────────────────────────────────────────

    pub fn form(&self) -> &SalesForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SalesForm {
        &mut self.form
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn set_expiration_enabled(&mut self, enabled: bool) {
        self.expiration_enabled = enabled;
        if !enabled {
            self.form.set_expiration(None);
        }
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Validate and, if everything passes, enter `Submitting`.
    pub fn begin_submit(&mut self) -> Result<PendingOrder, SubmitBlocked> {
        match self.state {
            ModalState::Closed => return Err(SubmitBlocked::NotOpen),
            ModalState::Submitting => return Err(SubmitBlocked::AlreadySubmitting),
            ModalState::Open => {}
        }

        self.form.touch_all();
        self.form.count_submit();
        let errors = self.form.errors();
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "Sales form invalid");
            return Err(SubmitBlocked::Invalid(errors));
        }

        let Some(account) = self.account.current() else {
            self.toasts
                .error("error", OrderError::NoAccount.to_string());
            return Err(SubmitBlocked::NoAccount);
        };

        let values = self.form.values();
        let (Some(price), Some(category), Some(deposit)) =
            (values.price, values.category, values.pledge)
        else {
            // Unreachable once the schema passed.
            return Err(SubmitBlocked::Invalid(self.form.errors()));
        };

        let params = OrderParams {
            address: account.address,
            category_id: category,
            deposit,
            price,
            class_id: self.props.class_id.clone(),
            token_id: self.props.token_id.clone(),
        };
        tracing::info!(
            address = %params.address,
            class_id = %params.class_id,
            token_id = %params.token_id,
            price = %params.price,
            deposit = %params.deposit,
            category_id = params.category_id,
            "Submitting sale order"
        );

        self.form.set_submitting(true);
        self.state = ModalState::Submitting;
        Ok(PendingOrder {
            params,
            token: self.lifetime.token(),
        })
    }

    /// Apply the order API's outcome.
    pub fn complete(
        &mut self,
        pending: PendingOrder,
        result: Result<OrderReceipt, OrderError>,
    ) -> SubmitOutcome {
        if !pending.token.is_current() || self.state != ModalState::Submitting {
            tracing::warn!(
                token_id = %pending.params.token_id,
                "Dropping order result for a closed sales modal"
            );
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(receipt) => {
                tracing::info!(tx_hash = ?receipt.tx_hash, "Sale order created");
                self.toasts.push("success", ToastStatus::Success, None);
                self.form.set_submitting(false);
                self.form.reset();
                self.close();
                SubmitOutcome::Succeeded(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sale order failed");
                self.toasts
                    .push("error", ToastStatus::Error, Some(err.to_string()));
                self.form.set_submitting(false);
                self.close();
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validate, call the order API once, apply the outcome.
    pub async fn submit<C: OrderCreator>(&mut self, creator: &C) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let result = creator.create_order(pending.params.clone()).await;
        self.complete(pending, result)
    }

    // ── View ─────────────────────────────────────────────────────────────

    pub fn view(&self) -> SalesModalView {
        let values = self.form.values();
        let categories = self
            .props
            .categories
            .iter()
            .enumerate()
            .map(|(idx, key)| CategoryOption {
                index: idx as u32,
                label: self.translator.t(key),
                selected: values.category == Some(idx as u32),
            })
            .collect();
        let field_errors = Field::ALL
            .iter()
            .filter_map(|&field| {
                self.form.field_error(field).map(|message| FieldError { field, message })
            })
            .collect();

        SalesModalView {
            is_open: self.is_open(),
            title: self.translator.t(TITLE_KEY),
            banner: self.form.banner(),
            banner_color: self.theme.colors.failure.clone(),
            price: values.price,
            pledge: values.pledge,
            categories,
            field_errors,
            expiration_enabled: self.expiration_enabled,
            confirm_label: self.translator.t("confirm"),
            is_loading: self.state == ModalState::Submitting,
        }
    }

    fn close(&mut self) {
        self.close_silently();
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    fn close_silently(&mut self) {
        self.lifetime.renew();
        self.form.reset();
        self.expiration_enabled = false;
        self.state = ModalState::Closed;
    }
}

impl fmt::Debug for SalesSettingModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SalesSettingModal")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("values", self.form.values())
            .finish()
    }
}
