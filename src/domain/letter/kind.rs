//! Transaction kinds and the per-kind meaning of the shared form fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RenderError;

/// The kind of deal a letter of intent is drafted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Acquisition of a business.
    Business,
    /// Offer of employment.
    Employment,
    /// Purchase of real property.
    RealEstate,
}

impl TransactionKind {
    /// Every supported kind, in form order.
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Business,
        TransactionKind::Employment,
        TransactionKind::RealEstate,
    ];

    /// Wire name used by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Business => "business",
            TransactionKind::Employment => "employment",
            TransactionKind::RealEstate => "real_estate",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Business => "Business Acquisition",
            TransactionKind::Employment => "Employment Offer",
            TransactionKind::RealEstate => "Real Estate Purchase",
        }
    }

    /// What the `price` field means for this kind.
    pub fn price_label(&self) -> &'static str {
        match self {
            TransactionKind::Business | TransactionKind::RealEstate => "purchase price",
            TransactionKind::Employment => "annual salary",
        }
    }

    /// What the `subject` field means for this kind.
    pub fn subject_label(&self) -> &'static str {
        match self {
            TransactionKind::Business => "deal subject",
            TransactionKind::Employment => "position title",
            TransactionKind::RealEstate => "property address",
        }
    }

    /// What the `exclusivityPeriod` field means for this kind, if anything.
    pub fn period_label(&self) -> Option<&'static str> {
        match self {
            TransactionKind::Business => Some("exclusivity period"),
            TransactionKind::Employment => None,
            TransactionKind::RealEstate => Some("inspection period"),
        }
    }

    /// Bracketed text rendered in place of an empty subject.
    pub fn subject_placeholder(&self) -> &'static str {
        match self {
            TransactionKind::Business => "[Transaction Subject]",
            TransactionKind::Employment => "[Position Title]",
            TransactionKind::RealEstate => "[Property Address]",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(TransactionKind::Business),
            "employment" => Ok(TransactionKind::Employment),
            "real_estate" | "realestate" | "real-estate" => Ok(TransactionKind::RealEstate),
            _ => Err(RenderError::UnknownTransactionType(s.to_string())),
        }
    }
}
