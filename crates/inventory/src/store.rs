use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stocktrack_core::{StoreError, StoreResult};

use crate::journal::Journal;

/// Threshold used by callers that do not pick their own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// In-memory stock store: item name -> quantity on hand.
///
/// Quantities never go negative. A removal that reaches (or would pass) zero
/// deletes the entry instead of leaving it at zero. Iteration order is
/// lexicographic by item name, so reports and saved files are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    pub(crate) stock: BTreeMap<String, i64>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `item` to stock, creating the entry if absent.
    ///
    /// Returns the new total for `item`. When a journal is supplied the add
    /// is recorded there as well; `None` discards the record.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        journal: Option<&mut Journal>,
    ) -> StoreResult<i64> {
        Self::validate_item(item)?;
        if qty < 0 {
            return Err(StoreError::invalid_argument(
                "quantity must be a non-negative integer",
            ));
        }

        let entry = self.stock.entry(item.to_string()).or_insert(0);
        *entry += qty;
        let total = *entry;

        if let Some(journal) = journal {
            journal.record_add(item, qty);
        }
        tracing::info!("Added {qty} of '{item}', new quantity: {total}");
        Ok(total)
    }

    /// Remove `qty` of `item` from stock.
    ///
    /// Never fails to the caller: validation and lookup errors are logged at
    /// error level and absorbed. Removing at least the remaining quantity
    /// deletes the item entirely.
    pub fn remove(&mut self, item: &str, qty: i64) {
        if let Err(err) = self.try_remove(item, qty) {
            tracing::error!("{err}");
        }
    }

    fn try_remove(&mut self, item: &str, qty: i64) -> StoreResult<()> {
        Self::validate_item(item)?;
        if qty <= 0 {
            return Err(StoreError::invalid_argument(
                "quantity must be a positive integer",
            ));
        }

        let current = match self.stock.get(item) {
            Some(&current) => current,
            None => {
                return Err(StoreError::not_found(format!(
                    "'{item}' not found in stock"
                )));
            }
        };

        if current > qty {
            self.stock.insert(item.to_string(), current - qty);
            tracing::info!("Removed {qty} of '{item}', remaining: {}", current - qty);
        } else {
            self.stock.remove(item);
            tracing::info!("Removed '{item}' completely from stock.");
        }
        Ok(())
    }

    /// Quantity on hand for `item`, or 0 when absent.
    ///
    /// The 0 return is overloaded on purpose: it means both "absent" (which
    /// also emits an error-level log record) and "zero stock". Callers cannot
    /// tell the two apart from the return value alone.
    pub fn get_quantity(&self, item: &str) -> StoreResult<i64> {
        Self::validate_item(item)?;
        match self.stock.get(item) {
            Some(&qty) => Ok(qty),
            None => {
                tracing::error!("'{item}' not found in stock");
                Ok(0)
            }
        }
    }

    /// Names of items with quantity strictly below `threshold`, in store
    /// iteration order.
    pub fn list_low_stock(&self, threshold: i64) -> StoreResult<Vec<String>> {
        if threshold < 0 {
            return Err(StoreError::invalid_argument(
                "threshold must be a non-negative integer",
            ));
        }
        Ok(self
            .stock
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(item, _)| item.clone())
            .collect())
    }

    /// Emit an info-level report line per item, plus a header.
    pub fn report(&self) {
        tracing::info!("Items Report:");
        for (item, qty) in &self.stock {
            tracing::info!("{item} -> {qty}");
        }
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(item, &qty)| (item.as_str(), qty))
    }

    fn validate_item(item: &str) -> StoreResult<()> {
        if item.trim().is_empty() {
            return Err(StoreError::invalid_argument("item name cannot be empty"));
        }
        Ok(())
    }
}
