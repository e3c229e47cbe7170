//! Tabular source capability.
//!
//! A [`RowSource`] hands out column metadata and rows in bounded,
//! offset-addressed pages. Filters and sorts are interpreted by the source,
//! not by its callers; repeated fetches with the same filter and sort must
//! yield a stable ordering so that paging neither skips nor duplicates rows.
//!
//! [`MemorySource`] is the in-memory reference implementation, useful both
//! as a real source for small datasets and as a test double.

mod error;
mod memory;
mod source;

pub use error::{Result, SourceError};
pub use memory::MemorySource;
pub use source::{Page, RowSource};
