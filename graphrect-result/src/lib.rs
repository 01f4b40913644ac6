//! Error types and result definitions for the graphrect crates.
//!
//! Every fallible operation in the workspace returns [`Result<T>`], whose error
//! variant is the single [`Error`] enum. Rectification never recovers from a
//! failure internally: errors are detected at the point of failure and handed
//! straight back to the caller, who decides whether to retry with corrected
//! input.
//!
//! # Error Categories
//!
//! - **Argument errors** ([`Error::EmptyColumnName`], [`Error::InvalidArgumentError`]):
//!   malformed caller input
//! - **Lookup failures** ([`Error::ColumnNotFound`]): the named column is absent
//! - **Conversion failures** ([`Error::UnrepresentableValue`], [`Error::NullIdentifier`],
//!   [`Error::UnsupportedConversion`]): the data cannot be rectified losslessly
//! - **Data format errors** ([`Error::Arrow`]): failures surfaced by Arrow itself
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
