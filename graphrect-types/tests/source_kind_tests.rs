use arrow::datatypes::DataType;

use graphrect_types::SourceKind;

#[test]
fn integer_widths_share_a_rule() {
    for dt in [
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
    ] {
        assert_eq!(SourceKind::classify(&dt), Some(SourceKind::Signed), "{dt}");
    }
    for dt in [
        DataType::UInt8,
        DataType::UInt16,
        DataType::UInt32,
        DataType::UInt64,
    ] {
        assert_eq!(SourceKind::classify(&dt), Some(SourceKind::Unsigned), "{dt}");
    }
}

#[test]
fn string_encodings_are_text() {
    let dict = DataType::Dictionary(Box::new(DataType::Int16), Box::new(DataType::Utf8));
    for dt in [DataType::Utf8, DataType::LargeUtf8, DataType::Utf8View, dict] {
        assert_eq!(SourceKind::classify(&dt), Some(SourceKind::Text), "{dt}");
        assert_eq!(SourceKind::Text.widened_type(), DataType::Utf8);
    }
}

#[test]
fn dictionaries_take_the_rule_of_their_values() {
    let ints = DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Int64));
    assert_eq!(SourceKind::classify(&ints), Some(SourceKind::Signed));

    let unsigned = DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::UInt32));
    assert_eq!(SourceKind::classify(&unsigned), Some(SourceKind::Unsigned));

    let dates = DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Date32));
    assert_eq!(SourceKind::classify(&dates), None);
}

#[test]
fn only_scale_zero_decimals_have_a_rule() {
    for dt in [DataType::Decimal128(10, 0), DataType::Decimal256(50, 0)] {
        assert_eq!(SourceKind::classify(&dt), Some(SourceKind::Decimal), "{dt}");
    }
    for dt in [DataType::Decimal128(10, 2), DataType::Decimal256(50, -1)] {
        assert_eq!(SourceKind::classify(&dt), None, "{dt}");
    }
}

#[test]
fn unsupported_types_have_no_rule() {
    for dt in [
        DataType::Date32,
        DataType::Binary,
        DataType::new_list(DataType::Int32, true),
    ] {
        assert_eq!(SourceKind::classify(&dt), None, "{dt}");
    }
}

#[test]
fn floats_and_scalars() {
    assert_eq!(
        SourceKind::classify(&DataType::Float32),
        Some(SourceKind::Float)
    );
    assert_eq!(
        SourceKind::classify(&DataType::Boolean),
        Some(SourceKind::Boolean)
    );
    assert_eq!(SourceKind::classify(&DataType::Null), Some(SourceKind::Null));
}
