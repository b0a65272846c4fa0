//! Wish entity and its value objects.
//!
//! # Responsibility
//! - Define `Wish` plus the `WishId`, `WishName`, `Expense` and `Currency`
//!   value objects it is built from.
//! - Generate unique wish identifiers.
//!
//! # Invariants
//! - `WishId` is never nil and is never reused for another wish.
//! - `WishName` is trimmed, non-empty and at most `WISH_NAME_MAX_CHARS` chars.
//! - `Expense` amounts are non-negative and `initial_fund <= price`.
//! - A `Wish` is immutable once constructed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Maximum accepted wish name length, counted in chars.
pub const WISH_NAME_MAX_CHARS: usize = 255;

/// Validation errors for wish value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishValidationError {
    NilId,
    InvalidId(String),
    EmptyName,
    NameTooLong { len: usize, max: usize },
    InvalidCurrency(String),
    NegativeAmount { field: &'static str, value: i64 },
    InitialFundExceedsPrice { initial_fund: i64, price: i64 },
}

impl Display for WishValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "wish id cannot be nil"),
            Self::InvalidId(value) => write!(f, "invalid wish id `{value}`"),
            Self::EmptyName => write!(f, "wish name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "wish name is {len} chars long; at most {max} allowed")
            }
            Self::InvalidCurrency(code) => write!(
                f,
                "invalid currency code `{code}`; expected three ASCII letters"
            ),
            Self::NegativeAmount { field, value } => {
                write!(f, "{field} ({value}) must not be negative")
            }
            Self::InitialFundExceedsPrice {
                initial_fund,
                price,
            } => write!(f, "initial_fund ({initial_fund}) must be <= price ({price})"),
        }
    }
}

impl Error for WishValidationError {}

/// Unique identifier of a wish.
///
/// Backed by a random v4 UUID, so ids are collision-resistant but carry no
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct WishId(Uuid);

impl WishId {
    /// Generates a fresh identifier.
    pub fn next() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one restored from an import.
    ///
    /// # Errors
    /// - Returns `WishValidationError::NilId` for the nil UUID.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, WishValidationError> {
        if uuid.is_nil() {
            return Err(WishValidationError::NilId);
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for WishId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WishId {
    type Err = WishValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| WishValidationError::InvalidId(value.to_string()))?;
        Self::from_uuid(uuid)
    }
}

impl TryFrom<Uuid> for WishId {
    type Error = WishValidationError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(value)
    }
}

impl From<WishId> for Uuid {
    fn from(value: WishId) -> Self {
        value.0
    }
}

/// Display name of a wish.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WishName(String);

impl WishName {
    /// Creates a name from user input.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(value: impl AsRef<str>) -> Result<Self, WishValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WishValidationError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > WISH_NAME_MAX_CHARS {
            return Err(WishValidationError::NameTooLong {
                len,
                max: WISH_NAME_MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WishName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WishName {
    type Error = WishValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WishName> for String {
    fn from(value: WishName) -> Self {
        value.0
    }
}

/// Three-letter currency code such as `USD`.
///
/// Only the code shape is checked; no registry lookup happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Result<Self, WishValidationError> {
        let normalized = code.as_ref().trim().to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WishValidationError::InvalidCurrency(
                code.as_ref().to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = WishValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Cost breakdown of a wish in one currency.
///
/// Amounts are integer minor units (cents for `USD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord", into = "ExpenseRecord")]
pub struct Expense {
    currency: Currency,
    price: i64,
    fee: i64,
    initial_fund: i64,
}

impl Expense {
    /// Builds an expense from a currency and raw scalar amounts.
    ///
    /// # Errors
    /// - Any amount is negative.
    /// - `initial_fund` is greater than `price`.
    pub fn from_currency_and_scalars(
        currency: Currency,
        price: i64,
        fee: i64,
        initial_fund: i64,
    ) -> Result<Self, WishValidationError> {
        for (field, value) in [("price", price), ("fee", fee), ("initial_fund", initial_fund)] {
            if value < 0 {
                return Err(WishValidationError::NegativeAmount { field, value });
            }
        }
        if initial_fund > price {
            return Err(WishValidationError::InitialFundExceedsPrice {
                initial_fund,
                price,
            });
        }
        Ok(Self {
            currency,
            price,
            fee,
            initial_fund,
        })
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn fee(&self) -> i64 {
        self.fee
    }

    pub fn initial_fund(&self) -> i64 {
        self.initial_fund
    }
}

#[derive(Serialize, Deserialize)]
struct ExpenseRecord {
    currency: Currency,
    price: i64,
    fee: i64,
    initial_fund: i64,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = WishValidationError;

    fn try_from(value: ExpenseRecord) -> Result<Self, Self::Error> {
        Self::from_currency_and_scalars(value.currency, value.price, value.fee, value.initial_fund)
    }
}

impl From<Expense> for ExpenseRecord {
    fn from(value: Expense) -> Self {
        Self {
            currency: value.currency,
            price: value.price,
            fee: value.fee,
            initial_fund: value.initial_fund,
        }
    }
}

/// Something a user wants to save up for.
///
/// Fields are private so a constructed wish cannot drift out of its
/// identity; repositories key entries by `id()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    id: WishId,
    name: WishName,
    expense: Expense,
}

impl Wish {
    pub fn new(id: WishId, name: WishName, expense: Expense) -> Self {
        Self { id, name, expense }
    }

    pub fn id(&self) -> WishId {
        self.id
    }

    pub fn name(&self) -> &WishName {
        &self.name
    }

    pub fn expense(&self) -> &Expense {
        &self.expense
    }
}
