//! Timing harness comparing the CSV record codec with serde_json.

use crate::config::BenchConfig;
use anyhow::{Context, Result};
use flat_derive::{FlatEnum, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Fulfilment state of a [`SampleOrder`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize, FlatEnum)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

/// Record used by the benchmark.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Record)]
pub struct SampleOrder {
    pub order_id: i64,
    pub customer: String,
    pub quantity: i32,
    pub total: f64,
    pub weight_kg: f32,
    pub express: bool,
    pub status: OrderStatus,
    pub items: Vec<String>,
    pub ratings: Vec<i32>,
    pub coupon: Option<String>,
    pub priority: u8,
}

impl SampleOrder {
    /// A record exercising every value kind, including quoted text.
    pub fn sample() -> Self {
        Self {
            order_id: 4_200_000_017,
            customer: "Smith, \"Jo\"".to_string(),
            quantity: 3,
            total: 1234.56,
            weight_kg: 2.5,
            express: true,
            status: OrderStatus::Shipped,
            items: vec![
                "keyboard".to_string(),
                "mouse".to_string(),
                "cable".to_string(),
            ],
            ratings: vec![5, 4, 5],
            coupon: None,
            priority: 2,
        }
    }
}

/// Codec under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Codec {
    Csv,
    Json,
}

/// Direction being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Serialize,
    Deserialize,
}

/// Elapsed time of one timed phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseTiming {
    pub codec: Codec,
    pub operation: Operation,
    pub iterations: usize,
    pub elapsed_ms: f64,
    pub per_op_ns: f64,
}

impl PhaseTiming {
    fn new(codec: Codec, operation: Operation, iterations: usize, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_secs_f64() * 1_000.0;
        let per_op_ns = if iterations > 0 {
            elapsed.as_nanos() as f64 / iterations as f64
        } else {
            0.0
        };
        Self {
            codec,
            operation,
            iterations,
            elapsed_ms,
            per_op_ns,
        }
    }
}

/// Result of a benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub csv_bytes: usize,
    pub json_bytes: usize,
    pub phases: Vec<PhaseTiming>,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<12} {:>12} {:>14} {:>12}",
            "codec", "operation", "iterations", "elapsed (ms)", "per op (ns)"
        )?;
        for phase in &self.phases {
            let codec = match phase.codec {
                Codec::Csv => "csv",
                Codec::Json => "json",
            };
            let operation = match phase.operation {
                Operation::Serialize => "serialize",
                Operation::Deserialize => "deserialize",
            };
            writeln!(
                f,
                "{:<6} {:<12} {:>12} {:>14.3} {:>12.1}",
                codec, operation, phase.iterations, phase.elapsed_ms, phase.per_op_ns
            )?;
        }
        write!(
            f,
            "payload: csv {} bytes, json {} bytes",
            self.csv_bytes, self.json_bytes
        )
    }
}

fn time<F: FnMut() -> Result<()>>(iterations: usize, mut run: F) -> Result<Duration> {
    let start = Instant::now();
    for _ in 0..iterations {
        run()?;
    }
    Ok(start.elapsed())
}

/// Warm up both codecs, then time serialize and deserialize of each.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    let record = SampleOrder::sample();
    let include_header = config.include_header;

    let csv_text = csv_record::serialize_with_header(&record, include_header);
    let json_text = serde_json::to_string(&record).context("Failed to serialize sample as JSON")?;

    let parsed: SampleOrder =
        csv_record::deserialize(&csv_text).context("Failed to read back sample CSV")?;
    if parsed != record {
        anyhow::bail!("CSV round trip of the sample record is not lossless: {parsed:?}");
    }

    info!(
        "Warming up with {} iterations per codec (header: {})",
        config.warmup, include_header
    );
    time(config.warmup, || {
        let text = csv_record::serialize_with_header(black_box(&record), include_header);
        black_box(csv_record::deserialize::<SampleOrder>(&text)?);
        Ok(())
    })?;
    time(config.warmup, || {
        let text = serde_json::to_string(black_box(&record))?;
        black_box(serde_json::from_str::<SampleOrder>(&text)?);
        Ok(())
    })?;

    let iterations = config.iterations;
    info!("Timing {iterations} iterations per phase");

    let mut phases = Vec::with_capacity(4);

    let elapsed = time(iterations, || {
        black_box(csv_record::serialize_with_header(
            black_box(&record),
            include_header,
        ));
        Ok(())
    })?;
    phases.push(PhaseTiming::new(Codec::Csv, Operation::Serialize, iterations, elapsed));

    let elapsed = time(iterations, || {
        black_box(csv_record::deserialize::<SampleOrder>(black_box(&csv_text))?);
        Ok(())
    })?;
    phases.push(PhaseTiming::new(Codec::Csv, Operation::Deserialize, iterations, elapsed));

    let elapsed = time(iterations, || {
        black_box(serde_json::to_string(black_box(&record))?);
        Ok(())
    })?;
    phases.push(PhaseTiming::new(Codec::Json, Operation::Serialize, iterations, elapsed));

    let elapsed = time(iterations, || {
        black_box(serde_json::from_str::<SampleOrder>(black_box(&json_text))?);
        Ok(())
    })?;
    phases.push(PhaseTiming::new(Codec::Json, Operation::Deserialize, iterations, elapsed));

    for phase in &phases {
        debug!(
            "{:?} {:?}: {:.3} ms",
            phase.codec, phase.operation, phase.elapsed_ms
        );
    }

    Ok(BenchReport {
        config: config.clone(),
        csv_bytes: csv_text.len(),
        json_bytes: json_text.len(),
        phases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trips() {
        let record = SampleOrder::sample();
        let text = csv_record::serialize(&record);
        let parsed: SampleOrder = csv_record::deserialize(&text).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_sample_header() {
        assert_eq!(
            csv_record::header::<SampleOrder>(),
            "coupon,customer,express,items,order_id,priority,quantity,ratings,status,total,weight_kg"
        );
    }

    #[test]
    fn test_run_reports_all_phases() {
        let config = BenchConfig {
            iterations: 3,
            warmup: 1,
            include_header: false,
        };
        let report = run(&config).unwrap();
        assert_eq!(report.phases.len(), 4);
        assert!(report.phases.iter().all(|p| p.iterations == 3));
        assert_eq!(report.phases[0].codec, Codec::Csv);
        assert_eq!(report.phases[3].operation, Operation::Deserialize);
        assert!(report.csv_bytes > 0);
        assert!(report.json_bytes > 0);

        let rendered = report.to_string();
        assert!(rendered.contains("csv"));
        assert!(rendered.contains("deserialize"));
    }
}
