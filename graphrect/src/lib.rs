//! graphrect: identifier rectification for Arrow-backed graph tables
//!
//! This crate is the primary entrypoint for the graphrect toolkit. It
//! re-exports the rectifier and its supporting types from the underlying
//! `graphrect-*` crates, providing a unified API surface for ingestion code.
//!
//! # Quick Start
//!
//! Canonicalize the endpoint columns of an edge table:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use arrow::array::{ArrayRef, Int64Array};
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use graphrect::rectify_edge_table;
//!
//! let schema = Arc::new(Schema::new(vec![
//!     Field::new("src", DataType::Int64, false),
//!     Field::new("dst", DataType::Int64, false),
//! ]));
//! let src: ArrayRef = Arc::new(Int64Array::from(vec![0, 1]));
//! let dst: ArrayRef = Arc::new(Int64Array::from(vec![1, 2]));
//! let edges = RecordBatch::try_new(schema, vec![src, dst]).unwrap();
//!
//! let edges = rectify_edge_table(&edges, "src", "dst").unwrap();
//! assert_eq!(edges.schema().field(0).data_type(), &DataType::Int32);
//! assert_eq!(edges.schema().field(1).data_type(), &DataType::Int32);
//! ```
//!
//! # Architecture
//!
//! - **Rectifier** (`graphrect-rectify`): column conversion and the node/edge helpers.
//! - **Types** (`graphrect-types`): the closed `IdType` and `SourceKind` tags.
//! - **Results** (`graphrect-result`): the workspace-wide `Error` and `Result`.

// Re-export the rectifier as the primary user-facing API
pub use graphrect_rectify::{
    GraphRectifier, NullPolicy, RectifyOptions, rectify_array, rectify_column,
    rectify_column_with_options, rectify_columns, rectify_edge_ids, rectify_edge_table,
    rectify_node_ids,
};

// Re-export type tags
pub use graphrect_types::{CANONICAL_ID_TYPE, IdType, SourceKind};

// Re-export result types for error handling
pub use graphrect_result::{Error, Result};
