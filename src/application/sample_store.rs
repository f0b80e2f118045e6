// Sample store - parsed charge history and its compressed timeline
use crate::application::gap_compressor::compress;
use crate::domain::sample::{ChargeStatus, Sample};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected `timestamp<TAB>charge<TAB>status`, found {found} field(s)")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: invalid timestamp `{value}`")]
    InvalidTimestamp { line: usize, value: String },

    #[error("line {line}: invalid charge `{value}`")]
    InvalidCharge { line: usize, value: String },

    #[error("history contains no samples with a known status")]
    NoSamples,
}

/// Parses tab separated history lines, dropping `unknown` status readings.
/// Trailing blank lines are ignored; any other malformed line, blank ones
/// included, fails the whole load.
pub fn parse_samples(raw: &str) -> Result<Vec<Sample>, ParseError> {
    let mut samples = Vec::new();
    let body = raw.trim_end();
    if body.is_empty() {
        return Ok(samples);
    }

    for (idx, line) in body.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(ParseError::MissingFields {
                line: line_no,
                found: fields.len(),
            });
        }

        let timestamp = fields[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidTimestamp {
                line: line_no,
                value: fields[0].to_string(),
            })?;

        let charge = fields[1]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| ParseError::InvalidCharge {
                line: line_no,
                value: fields[1].to_string(),
            })?;

        let Ok(status) = fields[2].parse::<ChargeStatus>();
        if status == ChargeStatus::Unknown {
            continue;
        }

        samples.push(Sample::new(timestamp, charge, status));
    }

    Ok(samples)
}

#[derive(Debug, Clone)]
pub struct SampleStore {
    series: Vec<Sample>,
    timeline: Vec<f64>,
    compressed: Vec<f64>,
}

impl SampleStore {
    pub fn load(raw: &str, gap_threshold_secs: f64) -> Result<Self, ParseError> {
        Self::from_samples(parse_samples(raw)?, gap_threshold_secs)
    }

    /// Builds a store from already parsed samples. Input order is kept as is.
    pub fn from_samples(samples: Vec<Sample>, gap_threshold_secs: f64) -> Result<Self, ParseError> {
        let series: Vec<Sample> = samples
            .into_iter()
            .filter(|s| s.status != ChargeStatus::Unknown)
            .collect();

        if series.is_empty() {
            return Err(ParseError::NoSamples);
        }

        let timeline: Vec<f64> = series.iter().map(|s| s.timestamp as f64).collect();
        let compressed = compress(&timeline, gap_threshold_secs);

        tracing::debug!(
            "Loaded {} samples spanning {}..{}",
            series.len(),
            series[0].timestamp,
            series[series.len() - 1].timestamp
        );

        Ok(Self {
            series,
            timeline,
            compressed,
        })
    }

    pub fn series(&self) -> &[Sample] {
        &self.series
    }

    /// Sample timestamps as plotted in relative and absolute modes
    pub fn timeline(&self) -> &[f64] {
        &self.timeline
    }

    /// Gap-compressed timestamps, index-aligned with `series`
    pub fn compressed_timeline(&self) -> &[f64] {
        &self.compressed
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn latest(&self) -> &Sample {
        // non-empty by construction
        &self.series[self.series.len() - 1]
    }

    pub fn current_charge(&self) -> f64 {
        self.latest().charge
    }

    pub fn last_status(&self) -> ChargeStatus {
        self.latest().status
    }
}
