use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Product category. Stored and serialized by its upper-case name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    DeriveActiveEnum,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "CLOTHS")]
    Cloths,
    #[sea_orm(string_value = "FOOD")]
    Food,
    #[sea_orm(string_value = "HOUSEWARES")]
    Housewares,
    #[sea_orm(string_value = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
}

impl Category {
    /// Looks a category up by its exact name (`"FOOD"`, not `"food"`).
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hat")]
    pub name: String,
    #[schema(example = "A red fedora")]
    pub description: String,
    /// Decimal amount, serialized as a string to keep precision
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// Request body for create and update.
///
/// An `id` in the body is ignored; ids come from the store on create and
/// from the path on update.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Hat")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 250))]
    #[schema(example = "A red fedora")]
    pub description: String,
    /// Accepts a JSON string (`"19.99"`) or number (`19.99`)
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// Prices are stored as `numeric(14, 2)`: two fraction digits, twelve integer digits.
const PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 1_000_000_000_000;

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price_precision"));
    }
    if *price >= Decimal::from(PRICE_LIMIT) {
        return Err(ValidationError::new("price_too_large"));
    }
    Ok(())
}

impl Product {
    pub fn new(id: i32, input: ProductPayload) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            available: input.available,
            category: input.category,
        }
    }

    /// Replace every mutable field; the id is left alone.
    pub fn apply(&mut self, input: ProductPayload) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.available = input.available;
        self.category = input.category;
    }
}

/// Outcome of reading a boolean query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolParam {
    /// Parameter not supplied
    Absent,
    /// Supplied but not a recognized token
    Invalid,
    Value(bool),
}

/// Reads `true/1/yes/y/t` and `false/0/no/n/f`, ignoring case and
/// surrounding whitespace.
pub fn parse_bool_param(raw: Option<&str>) -> BoolParam {
    let Some(raw) = raw else {
        return BoolParam::Absent;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "t" => BoolParam::Value(true),
        "false" | "0" | "no" | "n" | "f" => BoolParam::Value(false),
        _ => BoolParam::Invalid,
    }
}

/// Query string accepted by the list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact product name
    pub name: Option<String>,
    /// Category name, e.g. `FOOD`
    pub category: Option<String>,
    /// Availability flag: true/false, 1/0, yes/no, y/n, t/f
    pub available: Option<String>,
}

/// The single filter a list request applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Name(String),
    Category(Category),
    Available(bool),
}

impl ProductQuery {
    /// Picks one filter: `name`, then `category`, then `available`.
    ///
    /// Empty `name` and `category` values count as not supplied. An empty
    /// `available` value is still parsed, and rejected.
    pub fn into_filter(self) -> ProductResult<ProductFilter> {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            return Ok(ProductFilter::Name(name));
        }

        if let Some(category) = self.category.filter(|c| !c.is_empty()) {
            return Category::from_name(&category)
                .map(ProductFilter::Category)
                .ok_or(ProductError::InvalidCategory(category));
        }

        match parse_bool_param(self.available.as_deref()) {
            BoolParam::Absent => Ok(ProductFilter::All),
            BoolParam::Value(available) => Ok(ProductFilter::Available(available)),
            BoolParam::Invalid => Err(ProductError::InvalidAvailability(
                self.available.unwrap_or_default(),
            )),
        }
    }
}
