use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use graphrect_result::Result;

pub const ID_COLUMN_NAME: &str = "ids";
pub const LETTERS_COLUMN_NAME: &str = "letters";

/// Build a table from `(name, values)` pairs, in order.
///
/// Every field is nullable. Fails if the arrays differ in length.
pub fn table_from_columns<'a, I>(columns: I) -> Result<RecordBatch>
where
    I: IntoIterator<Item = (&'a str, ArrayRef)>,
{
    let mut fields = Vec::new();
    let mut arrays = Vec::new();
    for (name, array) in columns {
        fields.push(Field::new(name, array.data_type().clone(), true));
        arrays.push(array);
    }
    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}

/// `ids` holds 0..=25 as `Int64`; `letters` holds "A" through "Z".
pub fn letters_and_ids_table() -> Result<RecordBatch> {
    let letters: Vec<String> = ('A'..='Z').map(String::from).collect();
    let ids = Int64Array::from_iter_values(0..letters.len() as i64);
    table_from_columns([
        (ID_COLUMN_NAME, Arc::new(ids) as ArrayRef),
        (
            LETTERS_COLUMN_NAME,
            Arc::new(StringArray::from(letters)) as ArrayRef,
        ),
    ])
}

/// Edge table with `Int64` endpoints and a text label column.
pub fn edge_table(edges: &[(i64, i64)]) -> Result<RecordBatch> {
    let src: Int64Array = edges.iter().map(|(s, _)| Some(*s)).collect();
    let dst: Int64Array = edges.iter().map(|(_, d)| Some(*d)).collect();
    let labels: StringArray = edges
        .iter()
        .map(|(s, d)| Some(format!("{s}->{d}")))
        .collect();
    table_from_columns([
        ("src", Arc::new(src) as ArrayRef),
        ("dst", Arc::new(dst) as ArrayRef),
        ("label", Arc::new(labels) as ArrayRef),
    ])
}
