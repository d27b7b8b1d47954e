//! JSON file storage layer
//!
//! One JSON document holds the whole ledger; writes are atomic
//! (temp-file-then-rename) so a crash cannot leave a torn file.

pub mod file_io;
pub mod ledger;

pub use ledger::{Ledger, LedgerStore};
