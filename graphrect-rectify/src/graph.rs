//! Graph-facing entry points over the column rectifier.
//!
//! Node tables carry one identifier column; edge tables carry two (source and
//! destination). Both must end up in the same type for edge endpoints to join
//! against node IDs, which is what these helpers guarantee.

use arrow::record_batch::RecordBatch;
use graphrect_result::{Error, Result};
use graphrect_types::{CANONICAL_ID_TYPE, IdType};
use rustc_hash::FxHashSet;

use crate::options::RectifyOptions;
use crate::rectifier::{locate_column, rectify_column, rectify_column_with_options};

/// Rectify an edge endpoint column into [`CANONICAL_ID_TYPE`].
pub fn rectify_edge_ids(table: &RecordBatch, column_name: &str) -> Result<RecordBatch> {
    rectify_column(table, column_name, CANONICAL_ID_TYPE)
}

/// Rectify a node identifier column into [`CANONICAL_ID_TYPE`].
pub fn rectify_node_ids(table: &RecordBatch, column_name: &str) -> Result<RecordBatch> {
    rectify_column(table, column_name, CANONICAL_ID_TYPE)
}

/// Rectify several columns of one table into `target`.
///
/// Every name is validated before any values are converted, so a missing or
/// repeated column fails without doing conversion work. Columns are then
/// rectified in the order given; the first conversion failure ends the call.
pub fn rectify_columns(
    table: &RecordBatch,
    column_names: &[&str],
    target: IdType,
    options: &RectifyOptions,
) -> Result<RecordBatch> {
    let mut seen = FxHashSet::default();
    for &name in column_names {
        locate_column(table, name)?;
        if !seen.insert(name) {
            return Err(Error::InvalidArgumentError(format!(
                "column '{name}' listed more than once"
            )));
        }
    }

    column_names.iter().try_fold(table.clone(), |acc, name| {
        rectify_column_with_options(&acc, name, target, options)
    })
}

/// Rectify both endpoint columns of an edge table into [`CANONICAL_ID_TYPE`].
///
/// `source` and `destination` must name different columns.
pub fn rectify_edge_table(
    table: &RecordBatch,
    source: &str,
    destination: &str,
) -> Result<RecordBatch> {
    rectify_columns(
        table,
        &[source, destination],
        CANONICAL_ID_TYPE,
        &RectifyOptions::default(),
    )
}

/// A reusable rectification setup for the node and edge tables of one graph.
///
/// The default targets [`CANONICAL_ID_TYPE`] with default options. The value is
/// `Copy` and holds no state between calls, so one instance can be shared by
/// any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphRectifier {
    target: IdType,
    options: RectifyOptions,
}

impl GraphRectifier {
    pub fn new(target: IdType) -> Self {
        Self {
            target,
            options: RectifyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RectifyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target(&self) -> IdType {
        self.target
    }

    pub fn options(&self) -> &RectifyOptions {
        &self.options
    }

    /// Rectify the identifier column of a node table.
    pub fn rectify_nodes(&self, table: &RecordBatch, id_column: &str) -> Result<RecordBatch> {
        rectify_column_with_options(table, id_column, self.target, &self.options)
    }

    /// Rectify the source and destination columns of an edge table.
    pub fn rectify_edges(
        &self,
        table: &RecordBatch,
        source: &str,
        destination: &str,
    ) -> Result<RecordBatch> {
        rectify_columns(table, &[source, destination], self.target, &self.options)
    }
}
