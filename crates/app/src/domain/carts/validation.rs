//! Cart Validation

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::domain::carts::models::{Cart, CartItem};

/// What a [`ValidationError`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Cart,
    CartItem,
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Cart => f.write_str("cart"),
            Self::CartItem => f.write_str("cart item"),
        }
    }
}

/// Every rule an entity broke, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{subject} is invalid: {}", .violations.join(";"))]
pub struct ValidationError {
    subject: Subject,
    violations: Vec<String>,
}

impl ValidationError {
    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    fn check(subject: Subject, violations: Vec<String>) -> Result<(), Self> {
        if violations.is_empty() {
            return Ok(());
        }

        Err(Self {
            subject,
            violations,
        })
    }
}

impl CartItem {
    /// Validate the item. All rules are evaluated, none short-circuit.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push("name must not be empty".to_string());
        }

        if self.quantity == 0 {
            violations.push("quantity must be greater than 0".to_string());
        }

        if self.price <= 0.0 {
            violations.push("price must be greater than 0".to_string());
        }

        if self.discount < 0.0 {
            violations.push("discount must not be negative".to_string());
        }

        if self.discount > self.price {
            violations.push("discount cannot be bigger than price".to_string());
        }

        ValidationError::check(Subject::CartItem, violations)
    }
}

impl Cart {
    /// Validate the cart fee and every item, reporting items by position.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.transportation_fee < 0.0 {
            violations.push("transportation fee must not be negative".to_string());
        }

        for (position, item) in self.items.iter().enumerate() {
            if let Err(error) = item.validate() {
                violations.push(format!("item {position}: {error}"));
            }
        }

        ValidationError::check(Subject::Cart, violations)
    }
}
