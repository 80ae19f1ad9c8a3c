use paramtrace_core::{ByteOrder, DataError, Schema, SignalSpec, TraceError, ValueType};
use paramtrace_decode::{RecordDecoder, decode_records};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Two int16 signals packed into a 4-byte record; `a` scaled by 2 and biased by 1.
fn two_int16_schema() -> Schema {
    Schema::new(
        4,
        vec![
            SignalSpec::new("a", 0, ValueType::Int16).with_scale_bias(2.0, 1.0),
            SignalSpec::new("b", 2, ValueType::Int16),
        ],
    )
}

fn int16_records(values: &[(i16, i16)]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(values.len() * 4);
    for (a, b) in values {
        buf.extend_from_slice(&a.to_le_bytes());
        buf.extend_from_slice(&b.to_le_bytes());
    }
    buf
}

fn ys(series: &paramtrace_core::Series) -> Vec<f64> {
    series.samples.iter().map(|s| s.y).collect()
}

// ── decoding ─────────────────────────────────────────────────────────────────

#[test]
fn decodes_single_record_with_scale_and_bias() {
    let schema = two_int16_schema();
    let series = decode_records(&schema, &[0x01, 0x00, 0x05, 0x00]).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "a");
    assert_eq!(series[1].name, "b");
    assert_eq!(series[0].samples.len(), 1);
    assert_eq!(series[0].samples[0].x, 0.0);
    assert_eq!(series[0].samples[0].y, 3.0);
    assert_eq!(series[1].samples[0].x, 0.0);
    assert_eq!(series[1].samples[0].y, 5.0);
}

#[test]
fn x_is_record_index() {
    let schema = two_int16_schema();
    let data = int16_records(&[(0, 10), (1, 11), (2, 12), (3, 13)]);
    let series = decode_records(&schema, &data).unwrap();

    let xs: Vec<f64> = series[1].samples.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(ys(&series[1]), vec![10.0, 11.0, 12.0, 13.0]);
    assert_eq!(ys(&series[0]), vec![1.0, 3.0, 5.0, 7.0]);
}

#[test]
fn trailing_partial_record_is_ignored() {
    let schema = two_int16_schema();
    let mut data = int16_records(&[(1, 2), (3, 4)]);
    data.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let series = decode_records(&schema, &data).unwrap();
    assert_eq!(series[0].len(), 2);
    assert_eq!(series[1].len(), 2);
}

#[test]
fn carries_unit_into_series() {
    let schema = Schema::new(
        2,
        vec![SignalSpec::new("alt", 0, ValueType::UInt16).with_unit("ft")],
    );
    let series = decode_records(&schema, &[0x10, 0x00]).unwrap();
    assert_eq!(series[0].unit, "ft");
    assert_eq!(series[0].samples[0].y, 16.0);
}

#[test]
fn every_type_decodes_at_both_ends_of_the_record() {
    let cases: [(ValueType, Vec<u8>, f64); 6] = [
        (ValueType::Int16, (-300_i16).to_le_bytes().to_vec(), -300.0),
        (ValueType::UInt16, 60_000_u16.to_le_bytes().to_vec(), 60_000.0),
        (ValueType::Int32, (-70_000_i32).to_le_bytes().to_vec(), -70_000.0),
        (ValueType::UInt32, 3_000_000_000_u32.to_le_bytes().to_vec(), 3_000_000_000.0),
        (ValueType::Float32, 0.5_f32.to_le_bytes().to_vec(), 0.5),
        (ValueType::Float64, (-1.25_f64).to_le_bytes().to_vec(), -1.25),
    ];
    let record_size = 12;

    for (value_type, bytes, expected) in cases {
        let width = value_type.width();
        for offset in [0, record_size - width] {
            let mut record = vec![0u8; record_size];
            record[offset..offset + width].copy_from_slice(&bytes);
            let schema = Schema::new(record_size, vec![SignalSpec::new("v", offset, value_type)]);

            let series = decode_records(&schema, &record).unwrap();
            assert_eq!(
                series[0].samples[0].y, expected,
                "{value_type} at offset {offset}"
            );
        }
    }
}

#[test]
fn record_count_uses_whole_records() {
    let schema = two_int16_schema();
    let decoder = RecordDecoder::new(&schema).unwrap();
    assert_eq!(decoder.record_count(0), 0);
    assert_eq!(decoder.record_count(7), 1);
    assert_eq!(decoder.record_count(8), 2);
}

// ── rejection ────────────────────────────────────────────────────────────────

#[test]
fn rejects_big_endian_schema() {
    let mut schema = two_int16_schema();
    schema.byte_order = ByteOrder::Big;

    let err = decode_records(&schema, &[0; 8]).unwrap_err();
    assert!(matches!(
        err,
        TraceError::UnsupportedFormat {
            byte_order: ByteOrder::Big
        }
    ));
}

#[test]
fn rejects_data_shorter_than_one_record() {
    let schema = two_int16_schema();
    let err = decode_records(&schema, &[0x01, 0x02, 0x03]).unwrap_err();
    assert!(matches!(
        err,
        TraceError::Data(DataError::TooShort {
            len: 3,
            record_size: 4
        })
    ));

    let err = decode_records(&schema, &[]).unwrap_err();
    assert!(matches!(err, TraceError::Data(DataError::TooShort { len: 0, .. })));
}

#[test]
fn rejects_schema_without_signals() {
    let schema = Schema::new(4, Vec::new());
    let err = decode_records(&schema, &[0; 4]).unwrap_err();
    assert!(matches!(err, TraceError::Data(DataError::NoSignals)));
}

#[test]
fn rejects_zero_record_size() {
    let schema = Schema::new(0, vec![SignalSpec::new("a", 0, ValueType::Int16)]);
    let err = decode_records(&schema, &[0; 4]).unwrap_err();
    assert!(matches!(err, TraceError::Data(DataError::RecordSizeInvalid)));
}

#[test]
fn rejects_signal_past_record_end() {
    let schema = Schema::new(4, vec![SignalSpec::new("wide", 2, ValueType::Int32)]);
    let err = decode_records(&schema, &[0; 8]).unwrap_err();
    match err {
        TraceError::Data(DataError::SignalOutOfBounds {
            signal,
            end,
            record_size,
        }) => {
            assert_eq!(signal, "wide");
            assert_eq!(end, 6);
            assert_eq!(record_size, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn byte_order_is_checked_before_length() {
    let mut schema = two_int16_schema();
    schema.byte_order = ByteOrder::Big;
    let err = decode_records(&schema, &[]).unwrap_err();
    assert!(matches!(err, TraceError::UnsupportedFormat { .. }));
}

// ── parallel ─────────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let schema = Schema::new(
        8,
        vec![
            SignalSpec::new("a", 0, ValueType::Int16).with_scale_bias(0.5, -2.0),
            SignalSpec::new("b", 2, ValueType::UInt16),
            SignalSpec::new("c", 4, ValueType::Float32),
        ],
    );
    let mut data = Vec::new();
    for i in 0..1000_i16 {
        data.extend_from_slice(&i.to_le_bytes());
        data.extend_from_slice(&(i as u16 * 3).to_le_bytes());
        data.extend_from_slice(&(f32::from(i) * 0.25).to_le_bytes());
    }

    let decoder = RecordDecoder::new(&schema).unwrap();
    let sequential = decoder.decode(&data).unwrap();
    let parallel = decoder.decode_parallel(&data).unwrap();
    assert_eq!(sequential, parallel);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_rejects_short_data() {
    let schema = two_int16_schema();
    let decoder = RecordDecoder::new(&schema).unwrap();
    let err = decoder.decode_parallel(&[0x00]).unwrap_err();
    assert!(matches!(err, TraceError::Data(DataError::TooShort { .. })));
}

#[test]
fn rejects_offset_near_usize_max_without_overflow() {
    let schema = Schema::new(
        4,
        vec![SignalSpec::new("far", usize::MAX - 1, ValueType::Float64)],
    );
    let err = decode_records(&schema, &[0; 8]).unwrap_err();
    assert!(matches!(
        err,
        TraceError::Data(DataError::SignalOutOfBounds {
            end: usize::MAX,
            record_size: 4,
            ..
        })
    ));
}
