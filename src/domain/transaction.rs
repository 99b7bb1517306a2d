use serde::{Deserialize, Serialize};

/// Canonical category labels. These are fixed tokens in the data file format,
/// matched case-insensitively everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub const INCOME_LABEL: &'static str = "доход";
    pub const EXPENSE_LABEL: &'static str = "расход";

    /// Match a label case-insensitively. Returns `None` for anything that is
    /// not one of the two canonical tokens.
    pub fn from_label(label: &str) -> Option<Self> {
        let folded = label.to_lowercase();
        if folded == Self::INCOME_LABEL {
            Some(Category::Income)
        } else if folded == Self::EXPENSE_LABEL {
            Some(Category::Expense)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => Self::INCOME_LABEL,
            Category::Expense => Self::EXPENSE_LABEL,
        }
    }
}

/// A single ledger entry. There is no ID field: the position in the ledger
/// sequence is the only handle used for editing.
///
/// `category` is kept as a string rather than a `Category`: the file parser
/// accepts any category text (only the validators enforce the canonical
/// labels), and aggregation must tolerate records that match neither label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date in textual `YYYY-MM-DD` form
    pub date: String,
    /// Category label, canonically `"доход"` or `"расход"`
    pub category: String,
    /// Amount, positive for validated entries
    pub amount: f64,
    /// Free-form single-line description, may be empty
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// The canonical category of this transaction, if its label matches one.
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }
}

/// Render an amount the way the data file stores it.
/// Whole values keep one decimal: 1500.0 -> "1500.0", 12.5 -> "12.5"
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}
