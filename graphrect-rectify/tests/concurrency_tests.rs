use std::thread;

use arrow::array::Array;

use graphrect_rectify::{IdType, rectify_column};
use graphrect_test_utils::{ID_COLUMN_NAME, letters_and_ids_table};

#[test]
fn shared_table_rectifies_from_many_threads() {
    let table = letters_and_ids_table().unwrap();
    let targets = [IdType::Int32, IdType::Int64, IdType::UInt16, IdType::UInt64];

    thread::scope(|scope| {
        let handles: Vec<_> = targets
            .iter()
            .map(|&target| {
                let table = &table;
                scope.spawn(move || rectify_column(table, ID_COLUMN_NAME, target))
            })
            .collect();

        for (handle, target) in handles.into_iter().zip(targets) {
            let out = handle.join().unwrap().unwrap();
            assert_eq!(out.column(0).data_type(), &target.to_arrow());
            assert_eq!(out.num_rows(), table.num_rows());
        }
    });

    assert_eq!(
        table.schema().field(0).data_type(),
        &arrow::datatypes::DataType::Int64
    );
}
