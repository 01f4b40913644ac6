//! Identifier column rectification for Arrow-backed graph tables.
//!
//! Node and edge tables arrive from ingestion with identifier columns in
//! whatever type the loader inferred: `Int64` from a CSV reader, `Utf8` from a
//! query result, `UInt32` from a previous export. Joins and hashing downstream
//! only behave when node IDs and edge endpoints share one type, so every
//! identifier column is rectified into [`CANONICAL_ID_TYPE`] before a graph is
//! built.
//!
//! Rectification is loss-aware. A value that cannot be represented in the
//! target type fails the whole call with
//! [`Error::UnrepresentableValue`](graphrect_result::Error::UnrepresentableValue);
//! nothing is truncated, wrapped, or hashed, and no partial table is returned.
//!
//! ```
//! use std::sync::Arc;
//!
//! use arrow::array::{Array, ArrayRef, Int32Array, StringArray};
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use graphrect_rectify::{CANONICAL_ID_TYPE, rectify_column};
//!
//! let schema = Arc::new(Schema::new(vec![Field::new("ids_text", DataType::Utf8, false)]));
//! let ids: ArrayRef = Arc::new(StringArray::from(vec!["0", "1", "2"]));
//! let table = RecordBatch::try_new(schema, vec![ids]).unwrap();
//!
//! let rectified = rectify_column(&table, "ids_text", CANONICAL_ID_TYPE).unwrap();
//! let ids = rectified.column(0).as_any().downcast_ref::<Int32Array>().unwrap();
//! assert_eq!(ids.values().to_vec(), vec![0, 1, 2]);
//! ```

mod convert;
pub mod graph;
pub mod options;
pub mod rectifier;

pub use graph::{
    GraphRectifier, rectify_columns, rectify_edge_ids, rectify_edge_table, rectify_node_ids,
};
pub use graphrect_types::{CANONICAL_ID_TYPE, IdType, SourceKind};
pub use options::{NullPolicy, RectifyOptions};
pub use rectifier::{rectify_array, rectify_column, rectify_column_with_options};
