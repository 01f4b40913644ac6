use arrow::array::Array;
use graphrect::{CANONICAL_ID_TYPE, Error, IdType, rectify_column};
use graphrect_test_utils::{ID_COLUMN_NAME, LETTERS_COLUMN_NAME, letters_and_ids_table};

#[test]
fn facade_exposes_the_rectifier() {
    let table = letters_and_ids_table().unwrap();
    let out = rectify_column(&table, ID_COLUMN_NAME, CANONICAL_ID_TYPE).unwrap();
    assert_eq!(
        IdType::from_arrow(out.column(0).data_type()),
        Some(IdType::Int32)
    );

    let err = rectify_column(&table, LETTERS_COLUMN_NAME, CANONICAL_ID_TYPE).unwrap_err();
    assert!(matches!(err, Error::UnrepresentableValue { .. }));
}
