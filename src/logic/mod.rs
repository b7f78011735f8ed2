//! Pure business logic
//!
//! Every module here is side-effect free and unit-tested in place:
//! - filter: search, column, and date-range predicates
//! - sort: stable type-aware ordering and sort-toggle rules
//! - select: key-field row selection
//! - paging: page math and client-side slicing
//! - format: two-path display/export cell formatting
//! - export: CSV and workbook serialization of visible rows
//! - session: access-level guard decisions
//! - values: shared JSON value coercions (truthiness, text, dates)

pub mod export;
pub mod filter;
pub mod format;
pub mod paging;
pub mod select;
pub mod session;
pub mod sort;
pub mod values;
