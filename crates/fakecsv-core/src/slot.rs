//! Single current-table holder.
//!
//! The slot is replaced wholesale: a new table is swapped in as one `Arc`,
//! so a reader either sees the previous table or the new one, never a
//! partially written result.

use crate::table::Table;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Externally owned holder for the most recent result table.
#[derive(Debug, Default)]
pub struct TableSlot {
    current: RwLock<Option<Arc<Table>>>,
}

impl TableSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new table, returning the one it replaced.
    pub fn replace(&self, table: impl Into<Arc<Table>>) -> Option<Arc<Table>> {
        let table = table.into();
        debug!(
            "Replacing current table ({} rows x {} columns)",
            table.row_count(),
            table.column_count()
        );
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(table)
    }

    /// Current table, if any.
    pub fn current(&self) -> Option<Arc<Table>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the current table.
    pub fn clear(&self) -> Option<Arc<Table>> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Value;

    fn table(rows: i64) -> Table {
        Table::from_columns(vec!["n".to_string()], vec![(0..rows).map(Value::Int).collect()])
            .unwrap()
    }

    #[test]
    fn test_replace_and_read() {
        let slot = TableSlot::new();
        assert!(slot.current().is_none());

        assert!(slot.replace(table(2)).is_none());
        let first = slot.current().unwrap();
        assert_eq!(first.row_count(), 2);

        let previous = slot.replace(table(5)).unwrap();
        assert_eq!(previous.row_count(), 2);

        // A reader holding the old Arc keeps seeing the old table.
        assert_eq!(first.row_count(), 2);
        assert_eq!(slot.current().unwrap().row_count(), 5);
    }

    #[test]
    fn test_clear() {
        let slot = TableSlot::new();
        slot.replace(table(1));
        assert!(slot.clear().is_some());
        assert!(slot.current().is_none());
    }
}
