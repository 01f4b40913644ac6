use std::sync::Arc;

use arrow::array::{Array, ArrayRef, PrimitiveBuilder};
use arrow::compute::cast;
use arrow::datatypes::{
    ArrowPrimitiveType, FieldRef, Int8Type, Int16Type, Int32Type, Int64Type, Schema, UInt8Type,
    UInt16Type, UInt32Type, UInt64Type,
};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use graphrect_result::{Error, Result};
use graphrect_types::{IdType, SourceKind};

use crate::convert::{self, Candidate};
use crate::options::{NullPolicy, RectifyOptions};

/// Rectify `column_name` in `table` into `target` with default options.
///
/// Returns a new table in which the named column has type `target` and every
/// other column is the input's column, untouched. The input is not modified.
///
/// # Errors
///
/// - [`Error::EmptyColumnName`] if `column_name` is empty or whitespace
/// - [`Error::ColumnNotFound`] if no column matches exactly
/// - [`Error::UnrepresentableValue`] for the first value that has no exact
///   representation in `target`
/// - [`Error::UnsupportedConversion`] if the column's type has no conversion rule
pub fn rectify_column(
    table: &RecordBatch,
    column_name: &str,
    target: IdType,
) -> Result<RecordBatch> {
    rectify_column_with_options(table, column_name, target, &RectifyOptions::default())
}

/// [`rectify_column`] with explicit [`RectifyOptions`].
pub fn rectify_column_with_options(
    table: &RecordBatch,
    column_name: &str,
    target: IdType,
    options: &RectifyOptions,
) -> Result<RecordBatch> {
    let idx = locate_column(table, column_name)?;
    let source = table.column(idx);
    let rectified = rectify_array(column_name, source, target, options)?;

    if Arc::ptr_eq(&rectified, source) {
        tracing::trace!(column = column_name, %target, "column already rectified");
        return Ok(table.clone());
    }

    tracing::debug!(
        column = column_name,
        from = %source.data_type(),
        to = %target,
        rows = table.num_rows(),
        "rectified column"
    );

    let schema = table.schema();
    let mut fields: Vec<FieldRef> = schema.fields().iter().cloned().collect();
    fields[idx] = Arc::new(fields[idx].as_ref().clone().with_data_type(target.to_arrow()));
    let mut columns = table.columns().to_vec();
    columns[idx] = rectified;

    let schema = Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()));
    let batch_options = RecordBatchOptions::new().with_row_count(Some(table.num_rows()));
    Ok(RecordBatch::try_new_with_options(schema, columns, &batch_options)?)
}

/// Convert a single column's values into `target`.
///
/// `column_name` is only used to label errors. An array already of type
/// `target` is returned as the same `Arc`.
pub fn rectify_array(
    column_name: &str,
    array: &ArrayRef,
    target: IdType,
    options: &RectifyOptions,
) -> Result<ArrayRef> {
    let target_type = target.to_arrow();

    if array.data_type() == &target_type {
        if options.null_policy == NullPolicy::Reject {
            if let Some(row) = (0..array.len()).find(|&row| array.is_null(row)) {
                return Err(null_identifier(column_name, row));
            }
        }
        return Ok(Arc::clone(array));
    }

    let kind = SourceKind::classify(array.data_type()).ok_or_else(|| {
        Error::UnsupportedConversion {
            column: column_name.to_string(),
            from: array.data_type().clone(),
            to: target_type.clone(),
        }
    })?;

    let widened_type = kind.widened_type();
    let widened = if array.data_type() == &widened_type {
        Arc::clone(array)
    } else {
        cast(array, &widened_type)?
    };

    let candidates = convert::candidates(&widened, kind, options.trim_text)?;
    let builder = ColumnBuilder {
        column: column_name,
        target,
        null_policy: options.null_policy,
    };
    match target {
        IdType::Int8 => builder.build::<Int8Type>(candidates),
        IdType::Int16 => builder.build::<Int16Type>(candidates),
        IdType::Int32 => builder.build::<Int32Type>(candidates),
        IdType::Int64 => builder.build::<Int64Type>(candidates),
        IdType::UInt8 => builder.build::<UInt8Type>(candidates),
        IdType::UInt16 => builder.build::<UInt16Type>(candidates),
        IdType::UInt32 => builder.build::<UInt32Type>(candidates),
        IdType::UInt64 => builder.build::<UInt64Type>(candidates),
    }
}

/// Validate `column_name` and return its position in `table`.
pub(crate) fn locate_column(table: &RecordBatch, column_name: &str) -> Result<usize> {
    if column_name.trim_ascii().is_empty() {
        return Err(Error::EmptyColumnName);
    }
    table
        .schema()
        .index_of(column_name)
        .map_err(|_| Error::column_not_found(column_name))
}

fn null_identifier(column_name: &str, row: usize) -> Error {
    Error::NullIdentifier {
        column: column_name.to_string(),
        row,
    }
}

/// Range-checks candidates of one column into the target's Arrow array.
struct ColumnBuilder<'a> {
    column: &'a str,
    target: IdType,
    null_policy: NullPolicy,
}

impl ColumnBuilder<'_> {
    /// Range-check every candidate into `T`, stopping at the first failure.
    fn build<T>(&self, candidates: impl Iterator<Item = Option<Candidate>>) -> Result<ArrayRef>
    where
        T: ArrowPrimitiveType,
        T::Native: TryFrom<i128>,
    {
        let mut values = PrimitiveBuilder::<T>::with_capacity(candidates.size_hint().0);
        for (row, candidate) in candidates.enumerate() {
            match candidate {
                None => match self.null_policy {
                    NullPolicy::Preserve => values.append_null(),
                    NullPolicy::Reject => return Err(null_identifier(self.column, row)),
                },
                Some(Ok(value)) => {
                    let native = <T::Native as TryFrom<i128>>::try_from(value)
                        .map_err(|_| self.unrepresentable(row, value.to_string()))?;
                    values.append_value(native);
                }
                Some(Err(rendered)) => return Err(self.unrepresentable(row, rendered)),
            }
        }
        Ok(Arc::new(values.finish()))
    }

    fn unrepresentable(&self, row: usize, value: String) -> Error {
        Error::unrepresentable(self.column, row, value, self.target.to_arrow())
    }
}
