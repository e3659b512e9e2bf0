//! The transaction description collected by the letter form.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{RenderError, TransactionKind};
use crate::domain::foundation::ValidationError;

/// Date format accepted for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the form knows about one proposed deal.
///
/// All fields are kept as the text the user typed. Interpretation
/// (kind parsing, amount parsing) happens when the letter is rendered, so
/// a bad value surfaces as a classified [`RenderError`] instead of being
/// silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDescription {
    /// Raw transaction kind (`business`, `employment`, `real_estate`).
    #[serde(alias = "loiType")]
    pub kind: String,
    pub sender_name: String,
    pub sender_title: String,
    pub sender_company: String,
    pub recipient_name: String,
    pub recipient_title: String,
    pub recipient_company: String,
    /// Position title, property address or deal subject depending on kind.
    pub subject: String,
    /// Purchase price or annual salary depending on kind.
    pub price: String,
    /// Exclusivity or inspection window in days.
    pub exclusivity_period: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Falls back to `sender_name` when blank.
    pub signatory_name: String,
}

impl TransactionDescription {
    /// Creates an empty description of the given kind, dated today.
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            sender_name: String::new(),
            sender_title: String::new(),
            sender_company: String::new(),
            recipient_name: String::new(),
            recipient_title: String::new(),
            recipient_company: String::new(),
            subject: String::new(),
            price: String::new(),
            exclusivity_period: String::new(),
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            signatory_name: String::new(),
        }
    }

    /// The pre-filled values the form starts with.
    pub fn sample() -> Self {
        Self {
            sender_name: "John Doe".to_string(),
            sender_title: "CEO".to_string(),
            sender_company: "Innovate Corp".to_string(),
            recipient_name: "Jane Smith".to_string(),
            recipient_title: "CEO".to_string(),
            recipient_company: "Synergy Inc.".to_string(),
            subject: "Acquisition of Synergy Inc.".to_string(),
            price: "1000000".to_string(),
            exclusivity_period: "30".to_string(),
            signatory_name: "John Doe".to_string(),
            ..Self::new(TransactionKind::Business)
        }
    }

    /// Parses the raw `kind` field.
    pub fn kind(&self) -> Result<TransactionKind, RenderError> {
        self.kind.parse()
    }

    /// Name printed in the signature block.
    pub fn signatory(&self) -> &str {
        if self.signatory_name.trim().is_empty() {
            &self.sender_name
        } else {
            &self.signatory_name
        }
    }

    /// Subject text, or the kind's placeholder when blank.
    pub fn subject_or_placeholder(&self, kind: TransactionKind) -> &str {
        if self.subject.trim().is_empty() {
            kind.subject_placeholder()
        } else {
            &self.subject
        }
    }

    /// Checks the form rules that apply before a letter may be submitted.
    ///
    /// Reports the first offending field. Amount parsing is left to the
    /// renderer so that it is classified as a rendering failure.
    pub fn validate_for_submission(&self) -> Result<TransactionKind, ValidationError> {
        let kind = self
            .kind()
            .map_err(|e| ValidationError::invalid_format("kind", e.to_string()))?;

        let mut required: Vec<(&'static str, &str)> = vec![
            ("senderName", self.sender_name.as_str()),
            ("senderTitle", self.sender_title.as_str()),
            ("senderCompany", self.sender_company.as_str()),
            ("recipientName", self.recipient_name.as_str()),
        ];
        if kind == TransactionKind::Business {
            required.push(("recipientTitle", self.recipient_title.as_str()));
            required.push(("recipientCompany", self.recipient_company.as_str()));
        }
        required.extend([
            ("subject", self.subject.as_str()),
            ("price", self.price.as_str()),
            ("exclusivityPeriod", self.exclusivity_period.as_str()),
            ("date", self.date.as_str()),
        ]);

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::empty_field(*field));
        }

        if !self.exclusivity_period.trim().bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "exclusivityPeriod",
                "must be a whole number of days",
            ));
        }

        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            ValidationError::invalid_format("date", "expected a calendar date as YYYY-MM-DD")
        })?;

        Ok(kind)
    }
}

impl Default for TransactionDescription {
    fn default() -> Self {
        Self::new(TransactionKind::Business)
    }
}
