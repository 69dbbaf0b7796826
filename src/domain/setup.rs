//! User setup data: category palettes and the display currency symbol.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// Display symbol used when setup data carries none.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Color used for categories missing from the registry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#ccc";

/// A configured category with its display color.
///
/// The color is a presentation hint only; it is forwarded into breakdown
/// output and never enters any computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub color: String,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Category registries plus the display currency, read-only to the engine.
///
/// Every field defaults, so a host handing over a partial or missing blob
/// still gets a usable value rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetupData {
    #[serde(default = "SetupData::default_currency", alias = "currencySymbol")]
    pub currency: String,
    #[serde(default)]
    pub income_sources: Vec<CategoryEntry>,
    #[serde(default)]
    pub expense_categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub saving_categories: Vec<CategoryEntry>,
}

impl Default for SetupData {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            income_sources: Vec::new(),
            expense_categories: Vec::new(),
            saving_categories: Vec::new(),
        }
    }
}

impl SetupData {
    /// Decodes the host's persisted setup blob; `null` or missing fields
    /// fall back to defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Option<SetupData>>(raw)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// The registry list matching a transaction kind.
    pub fn palette(&self, kind: TransactionKind) -> &[CategoryEntry] {
        match kind {
            TransactionKind::Income => &self.income_sources,
            TransactionKind::Expense => &self.expense_categories,
            TransactionKind::Saving => &self.saving_categories,
        }
    }

    /// Resolves a category's display color by exact name match, with the
    /// default color for anything unregistered.
    pub fn color_for(&self, kind: TransactionKind, name: &str) -> String {
        self.palette(kind)
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.color.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string())
    }

    fn default_currency() -> String {
        DEFAULT_CURRENCY_SYMBOL.to_string()
    }
}
