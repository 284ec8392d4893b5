//! UI state: toasts, theme, translations, and the sales dialog.
//!
//! Nothing here draws. These are the state machines and view models a
//! renderer (native or WASM) binds to.

pub mod i18n;
pub mod sales_form;
pub mod sales_modal;
pub mod theme;
pub mod toast;

pub use i18n::{Locale, Translator};
pub use sales_form::{Field, FieldError, SalesForm, SalesFormValues, SalesSettingSchema};
pub use sales_modal::{
    ModalState, PendingOrder, SalesModalView, SalesSettingModal, SalesSettingProps,
    SubmitBlocked, SubmitOutcome,
};
pub use theme::Theme;
pub use toast::{Toast, ToastPosition, ToastStatus, Toasts};
