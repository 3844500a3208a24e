//! Write transactions.

use resilience_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::storage_err;

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
///
/// The write lock is taken up front, so contention surfaces as
/// `StorageError::Busy` before any row is written. Any error from `f`
/// drops the transaction, which rolls everything back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(storage_err)?;

    let result = f(&tx)?;

    tx.commit().map_err(storage_err)?;

    Ok(result)
}
