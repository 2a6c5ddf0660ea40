use flatcsv::config::{BenchConfig, BenchOverrides};
use flatcsv::{catalog, CsvRecordError, FlatEnum, Record, LINE_TERMINATOR};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, Default, Clone, Copy, PartialEq, FlatEnum)]
#[record(crate = "flatcsv::flat_core")]
enum Unit {
    #[default]
    Meter,
    Foot,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(crate = "flatcsv::flat_core")]
struct Measurement {
    label: String,
    value: f64,
    unit: Unit,
    samples: Vec<f32>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[record(crate = "flatcsv::flat_core")]
struct Tagged {
    r#type: String,
    count: i64,
}

#[test]
fn test_facade_round_trip() {
    let measurement = Measurement {
        label: "rod, steel".to_string(),
        value: 2.75,
        unit: Unit::Foot,
        samples: vec![2.5, 3.0],
    };

    let text = flatcsv::serialize(&measurement);
    let expected = format!(
        "label,samples,unit,value{LINE_TERMINATOR}\"rod, steel\",2.5;3,Foot,2.75{LINE_TERMINATOR}"
    );
    assert_eq!(text, expected);
    assert_eq!(
        flatcsv::deserialize::<Measurement>(&text).unwrap(),
        measurement
    );
}

#[test]
fn test_raw_identifier_member_name() {
    assert_eq!(flatcsv::header::<Tagged>(), "count,type");
}

#[test]
fn test_facade_errors() {
    let err = flatcsv::deserialize::<Measurement>("label,samples,unit,value\nrod,1;2,Inch,2\n")
        .unwrap_err();
    match &err {
        CsvRecordError::Field { member, source } => {
            assert_eq!(member, "unit");
            assert!(source.is_format());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // whitespace-only lines are data, not blank
    let parsed = flatcsv::deserialize::<Measurement>("  \n").unwrap();
    assert_eq!(parsed.label, "  ");

    assert_eq!(
        flatcsv::deserialize::<Measurement>("\n").unwrap_err(),
        CsvRecordError::EmptyInput
    );
}

#[test]
fn test_concurrent_codec_calls_on_distinct_types() {
    const THREADS: usize = 6;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    let record = Tagged {
                        r#type: format!("t{i}"),
                        count: i as i64,
                    };
                    let parsed: Tagged =
                        flatcsv::deserialize(&flatcsv::serialize(&record)).unwrap();
                    assert_eq!(parsed, record);
                } else {
                    let record = Measurement {
                        value: i as f64,
                        ..Measurement::default()
                    };
                    let parsed: Measurement =
                        flatcsv::deserialize(&flatcsv::serialize(&record)).unwrap();
                    assert_eq!(parsed, record);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(catalog::contains::<Tagged>());
    assert!(catalog::contains::<Measurement>());
    assert!(Arc::ptr_eq(
        &catalog::members::<Tagged>(),
        &catalog::members::<Tagged>()
    ));
}

#[test]
fn test_bench_config_resolution() {
    let overrides = BenchOverrides {
        iterations: Some(0),
        ..BenchOverrides::default()
    };
    assert!(BenchConfig::resolve(None, &overrides).is_err());
}
