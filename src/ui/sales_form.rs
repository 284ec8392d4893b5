//! Sales form state and its validation schema.
//!
//! Values are validated as a whole on every read; per-field errors and the
//! banner are only shown for fields the user has touched. Submitting touches
//! every field.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Price must be strictly greater than this.
pub const MIN_PRICE: Decimal = Decimal::ONE;

/// Pledge must be strictly greater than this; also the initial pledge.
pub const MIN_PLEDGE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Form fields in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Price,
    Category,
    Pledge,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Price, Field::Category, Field::Pledge];

    pub fn name(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Category => "category",
            Field::Pledge => "pledge",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw input that is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub field: Field,
    pub input: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be a number, got {:?}", self.field, self.input)
    }
}

impl std::error::Error for InputError {}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesFormValues {
    pub price: Option<Decimal>,
    /// Index into the offered category labels.
    pub category: Option<u32>,
    pub pledge: Option<Decimal>,
    /// Listing end. Not validated and not submitted.
    pub expiration: Option<DateTime<Utc>>,
}

impl Default for SalesFormValues {
    fn default() -> Self {
        Self {
            price: None,
            category: None,
            pledge: Some(MIN_PLEDGE),
            expiration: None,
        }
    }
}

/// Validation rules of the sales form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesSettingSchema {
    /// Number of offered categories; `None` skips the range check.
    pub category_count: Option<usize>,
}

impl SalesSettingSchema {
    /// Every failing rule, in field order.
    pub fn validate(&self, values: &SalesFormValues) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match values.price {
            None => errors.push(FieldError::new(Field::Price, "price is required")),
            Some(p) if p <= MIN_PRICE => errors.push(FieldError::new(
                Field::Price,
                "number should more than 1 MFT",
            )),
            Some(_) => {}
        }

        match values.category {
            None => errors.push(FieldError::new(
                Field::Category,
                "category is a required field",
            )),
            Some(idx) if self.category_count.is_some_and(|n| idx as usize >= n) => errors.push(
                FieldError::new(Field::Category, "category must be one of the offered options"),
            ),
            Some(_) => {}
        }

        match values.pledge {
            None => errors.push(FieldError::new(Field::Pledge, "pledge is a required field")),
            Some(p) if p <= MIN_PLEDGE => errors.push(FieldError::new(
                Field::Pledge,
                format!("pledge must be greater than {}", MIN_PLEDGE),
            )),
            Some(_) => {}
        }

        errors
    }
}

/// Form values plus interaction state.
#[derive(Debug, Clone)]
pub struct SalesForm {
    schema: SalesSettingSchema,
    initial: SalesFormValues,
    values: SalesFormValues,
    touched: BTreeSet<Field>,
    submitting: bool,
    submit_count: u32,
}

impl SalesForm {
    pub fn new(schema: SalesSettingSchema) -> Self {
        Self {
            schema,
            initial: SalesFormValues::default(),
            values: SalesFormValues::default(),
            touched: BTreeSet::new(),
            submitting: false,
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &SalesFormValues {
        &self.values
    }

    // ── Edits ────────────────────────────────────────────────────────────

    pub fn set_price(&mut self, price: Option<Decimal>) {
        self.values.price = price;
        self.touch(Field::Price);
    }

    /// Set the price from text input; empty clears it.
    pub fn set_price_input(&mut self, input: &str) -> Result<(), InputError> {
        let parsed = parse_number(Field::Price, input);
        self.touch(Field::Price);
        self.values.price = parsed?;
        Ok(())
    }

    pub fn set_category(&mut self, index: Option<u32>) {
        self.values.category = index;
        self.touch(Field::Category);
    }

    pub fn set_pledge(&mut self, pledge: Option<Decimal>) {
        self.values.pledge = pledge;
        self.touch(Field::Pledge);
    }

    /// Set the pledge from text input; empty clears it.
    pub fn set_pledge_input(&mut self, input: &str) -> Result<(), InputError> {
        let parsed = parse_number(Field::Pledge, input);
        self.touch(Field::Pledge);
        self.values.pledge = parsed?;
        Ok(())
    }

    pub fn set_expiration(&mut self, expiration: Option<DateTime<Utc>>) {
        self.values.expiration = expiration;
    }

    // ── Interaction state ────────────────────────────────────────────────

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub(crate) fn count_submit(&mut self) {
        self.submit_count += 1;
    }

    /// Back to the initial values with nothing touched.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.submitting = false;
        self.submit_count = 0;
    }

    // ── Validation ───────────────────────────────────────────────────────

    pub fn errors(&self) -> Vec<FieldError> {
        self.schema.validate(&self.values)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Error for `field`, shown once the field was touched.
    pub fn field_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// First outstanding error, shown once anything was touched.
    pub fn banner(&self) -> Option<String> {
        if self.touched.is_empty() {
            return None;
        }
        self.errors().into_iter().next().map(|e| e.message)
    }
}

fn parse_number(field: Field, input: &str) -> Result<Option<Decimal>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Some)
        .map_err(|_| InputError {
            field,
            input: input.to_string(),
        })
}
