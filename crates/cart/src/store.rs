use std::sync::{Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use scancart_core::{DomainResult, sum_prices};

use crate::line_item::LineItem;

/// The cart contents together with their total, read under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

/// Process-wide cart.
///
/// One instance is created at startup and shared by all handlers. All access
/// goes through a mutex, so appends from concurrent scans never interleave
/// within a batch. Appends that would push the total past the decimal range
/// are refused and leave the cart untouched, so the total of a stored cart is
/// always representable.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Mutex<Vec<LineItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written Vec behind,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<LineItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, item: LineItem) -> DomainResult<()> {
        self.extend([item]).map(|_| ())
    }

    /// Append a batch atomically and return the whole cart as it stood right
    /// after the append.
    ///
    /// The new total is computed before anything is written; on overflow the
    /// batch is dropped and the cart keeps its prior contents.
    pub fn extend<I>(&self, items: I) -> DomainResult<CartSnapshot>
    where
        I: IntoIterator<Item = LineItem>,
    {
        let batch: Vec<LineItem> = items.into_iter().collect();
        let mut guard = self.lock();
        let total = sum_prices(guard.iter().chain(&batch).map(|i| i.price))?;
        guard.extend(batch);
        Ok(CartSnapshot {
            items: guard.clone(),
            total,
        })
    }

    pub fn snapshot(&self) -> Vec<LineItem> {
        self.lock().clone()
    }

    /// Items and total read under a single lock.
    pub fn snapshot_with_total(&self) -> DomainResult<CartSnapshot> {
        let guard = self.lock();
        let total = sum_prices(guard.iter().map(|i| i.price))?;
        Ok(CartSnapshot {
            items: guard.clone(),
            total,
        })
    }

    pub fn total(&self) -> DomainResult<Decimal> {
        sum_prices(self.lock().iter().map(|i| i.price))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
