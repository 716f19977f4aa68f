//! Product record and its JSON shape.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Every field is optional on input and falls back to its zero value, so only
/// bodies of the wrong shape (non-object, bad syntax, mistyped fields) are
/// rejected. Capitalized field names (`ID`, `Title`, `IsNew`, ...) are
/// accepted as aliases. On output an empty discount and a false `isNew` are
/// omitted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Product {
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Price")]
    pub price: f64,
    #[serde(alias = "Discount", skip_serializing_if = "discount_is_blank")]
    pub discount: Option<String>,
    #[serde(
        rename = "isNew",
        alias = "IsNew",
        alias = "isnew",
        skip_serializing_if = "is_false"
    )]
    pub is_new: bool,
}

impl Product {
    /// Build a product without a discount label.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            price,
            discount: None,
            is_new: false,
        }
    }

    pub fn with_discount(mut self, discount: impl Into<String>) -> Self {
        self.discount = Some(discount.into());
        self
    }

    pub fn marked_new(mut self) -> Self {
        self.is_new = true;
        self
    }
}

fn discount_is_blank(discount: &Option<String>) -> bool {
    discount.as_deref().map_or(true, str::is_empty)
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
