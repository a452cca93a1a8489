//! A fixed-size, separate-chaining hash table over string keys.
//!
//! See [`BucketTable`] for the data structure and [`command`] for the small
//! line language the `bucket-table` binary uses to drive it.

pub use error::{Result, TableError};
pub use hash::fnv1a_32;
pub use table::BucketTable;

pub mod command;
mod error;
mod hash;
mod table;
