//! # Raw photometer log reader
//!
//! Utilities to parse **`.raw` photometer logs** and turn them into the per-star and
//! sky aggregates consumed by the reduction pipeline.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A small error type [`ParseRecordError`] describing record parsing failures.
//! - A line parser [`from_raw_line`] that converts a single log line into an
//!   [`Observation`] with the timestamp in **MJD (UTC)**.
//! - A crate-visible batch routine \[`extract_raw`\] that reads an entire file, skips the
//!   fixed instrument header, and aggregates each record's **mean of four sub-exposure
//!   counts** into an [`ObservationSet`].
//!
//! ## Record grammar
//! -----------------
//! ```text
//! <DD-MM-YYYY> <HH:MM:SS> [flag letter] <object name> <B|V> <n> <n> <n> <n>
//! ```
//!
//! Source files vary: some carry an optional single-letter classification flag before
//! the object name, some use object names with embedded spaces, and counts appear both
//! as fixed 5-digit zero-padded fields and as variable-length integers. One tolerant
//! pattern accepts all of these. The object name is trimmed before use as a grouping
//! key, and the literal name `SKY` (case-exact) routes the record to the sky background
//! series instead of the star map.
//!
//! ## Error handling
//! -----------------
//! Lines that do not match the grammar are **silently skipped**: headers, blank lines
//! and malformed telemetry are common and expected, so a non-match is normal control
//! flow, not an error (only an aggregate tally is logged at debug level). A line that
//! *does* match the grammar but carries an unparseable field (count overflow, impossible
//! calendar date) is a fatal [`PhotfitError::ParsingRawRecordError`]: that is corrupted
//! input, never silently dropped.
//!
//! ## See also
//! ------------
//! * [`Observation`] – Parsed photometer record.
//! * [`ObservationSet`] – Finished per-file aggregates.
//! * [`crate::time::obs_date_to_mjd`] – Timestamp → MJD (UTC).
use camino::Utf8Path;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{HEADER_LINE_COUNT, MIN_RAW_LINE_COUNT, SUB_EXPOSURES};
use crate::observations::{FilterBand, Observation};
use crate::photfit_errors::PhotfitError;
use crate::stars::ObservationSet;
use crate::time::obs_date_to_mjd;

/// Record grammar of a photometer log line.
///
/// Capture groups: 1 date, 2 time, 3 object name, 4 band, 5–8 sub-exposure counts.
/// The optional classification flag is tolerated and discarded.
static RECORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{2}-\d{2}-\d{4})\s+(\d{2}:\d{2}:\d{2})\s+(?:[A-Za-z]\s+)?([0-9A-Za-z_][0-9A-Za-z_ ]*?)\s+([BV])\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)",
    )
    .unwrap()
});

/// Line-level parsing errors for photometer records.
///
/// Variants
/// -----------------
/// * `NoRecordMatch` – The line does not match the record grammar; the reader skips it.
/// * `InvalidTimestamp` – Grammar-shaped date/time that is not a real calendar instant.
/// * `InvalidBand` – Band letter outside `{B, V}` (unreachable through the grammar,
///   kept as a defined failure for direct callers).
/// * `InvalidCount` – A count field that does not fit the counter width.
#[derive(Error, Debug, PartialEq)]
pub enum ParseRecordError {
    #[error("The line is not a photometer record")]
    NoRecordMatch,
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid filter band: {0}")]
    InvalidBand(String),
    #[error("Invalid count value: {0}")]
    InvalidCount(String),
}

/// Parse a single photometer log line into an [`Observation`].
///
/// Arguments
/// ---------
/// * `line`: one line of the data section of a `.raw` file
///
/// Return
/// ------
/// * A parsed [`Observation`], or [`PhotfitError::ParsingRawRecordError`] carrying
///   [`ParseRecordError::NoRecordMatch`] for a non-record line and a field-level
///   variant for a matched line with an unparseable field.
pub fn from_raw_line(line: &str) -> Result<Observation, PhotfitError> {
    let Some(caps) = RECORD_PATTERN.captures(line) else {
        return Err(ParseRecordError::NoRecordMatch.into());
    };

    let time = obs_date_to_mjd(&caps[1], &caps[2])
        .map_err(|_| ParseRecordError::InvalidTimestamp(format!("{} {}", &caps[1], &caps[2])))?;

    let target = caps[3].trim().to_string();

    let band: FilterBand = caps[4]
        .parse()
        .map_err(|_| ParseRecordError::InvalidBand(caps[4].to_string()))?;

    let mut counts = [0u32; SUB_EXPOSURES];
    for (slot, group) in counts.iter_mut().zip(5..) {
        *slot = caps[group]
            .parse()
            .map_err(|_| ParseRecordError::InvalidCount(caps[group].to_string()))?;
    }

    Ok(Observation::new(target, band, time, counts))
}

/// Read a full `.raw` photometer log, returning the per-star and sky aggregates.
///
/// The first [`HEADER_LINE_COUNT`] lines are instrument metadata and are dropped before
/// grammar matching, so their content can never reach the aggregates. Each matched
/// record contributes the **mean of its four sub-exposure counts** to either the sky
/// series (sentinel name `SKY`) or the star map; the individual counts are discarded.
///
/// Arguments
/// ---------
/// * `path`: path to the `.raw` file
///
/// Return
/// ------
/// * The finished [`ObservationSet`], or a fatal [`PhotfitError`]:
///   - [`PhotfitError::RawFileNotFound`] when the path does not resolve to a file,
///   - [`PhotfitError::InvalidFormatMissingData`] when the file is shorter than the
///     fixed header plus data section,
///   - [`PhotfitError::IoError`] on a read failure,
///   - [`PhotfitError::ParsingRawRecordError`] for a matched line with an unparseable
///     field.
pub(crate) fn extract_raw(path: &Utf8Path) -> Result<ObservationSet, PhotfitError> {
    if !path.is_file() {
        return Err(PhotfitError::RawFileNotFound(path.to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < MIN_RAW_LINE_COUNT {
        return Err(PhotfitError::InvalidFormatMissingData(path.to_string()));
    }

    let mut set = ObservationSet::default();
    let mut parsed = 0_usize;
    let mut skipped = 0_usize;

    for line in &lines[HEADER_LINE_COUNT..] {
        match from_raw_line(line) {
            Ok(obs) => {
                parsed += 1;
                let value = obs.mean_counts();
                let is_sky = obs.is_sky();
                let Observation { target, band, .. } = obs;
                if is_sky {
                    set.sky.push(band, value);
                } else {
                    set.stars.entry(target).or_default().push(band, value);
                }
            }
            Err(PhotfitError::ParsingRawRecordError(ParseRecordError::NoRecordMatch)) => {
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!("{path}: {parsed} records aggregated, {skipped} non-record lines skipped");

    Ok(set)
}

#[cfg(test)]
mod raw_reader_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_raw_line_with_flag_and_padded_counts() {
        let line = "07-02-2026 21:16:10 C PROCYON B 10250 10246 10254 10250";
        let obs = from_raw_line(line).unwrap();

        assert_eq!(obs.target, "PROCYON");
        assert_eq!(obs.band, FilterBand::B);
        assert_relative_eq!(obs.time, 61078.88622685185, max_relative = 1e-12);
        assert_eq!(obs.counts, [10250, 10246, 10254, 10250]);
        assert_eq!(obs.mean_counts(), 10250.0);
    }

    #[test]
    fn test_from_raw_line_multi_word_name_no_flag() {
        let line = "07-02-2026 21:21:00 ALPHA CMI V 20100 20108 20104 20112";
        let obs = from_raw_line(line).unwrap();

        assert_eq!(obs.target, "ALPHA CMI");
        assert_eq!(obs.band, FilterBand::V);
        assert_eq!(obs.mean_counts(), 20106.0);
    }

    #[test]
    fn test_from_raw_line_variable_length_counts() {
        let line = "01-01-2021 00:00:00 SKY V 180 1780 2 98765";
        let obs = from_raw_line(line).unwrap();

        assert!(obs.is_sky());
        assert_eq!(obs.time, 59215.0);
        assert_eq!(obs.counts, [180, 1780, 2, 98765]);
    }

    #[test]
    fn test_from_raw_line_unknown_band_is_not_a_record() {
        let line = "07-02-2026 21:20:30 C HD_49434 R 00500 00500 00500 00500";
        assert_eq!(
            from_raw_line(line),
            Err(PhotfitError::ParsingRawRecordError(
                ParseRecordError::NoRecordMatch
            ))
        );

        // lowercase band letters are not valid either
        let line = "07-02-2026 21:20:30 C HD_49434 v 00500 00500 00500 00500";
        assert_eq!(
            from_raw_line(line),
            Err(PhotfitError::ParsingRawRecordError(
                ParseRecordError::NoRecordMatch
            ))
        );
    }

    #[test]
    fn test_from_raw_line_garbage_is_not_a_record() {
        for line in ["", "   ", "PHOTOMETER-7 GAIN=4 APERTURE=12", "21:16:10 PROCYON B 1 2 3 4"] {
            assert_eq!(
                from_raw_line(line),
                Err(PhotfitError::ParsingRawRecordError(
                    ParseRecordError::NoRecordMatch
                )),
                "line {line:?} must not parse",
            );
        }
    }

    #[test]
    fn test_from_raw_line_count_overflow_is_fatal() {
        let line = "07-02-2026 21:16:10 C PROCYON B 99999999999999999999 10246 10254 10250";
        assert!(matches!(
            from_raw_line(line),
            Err(PhotfitError::ParsingRawRecordError(
                ParseRecordError::InvalidCount(_)
            ))
        ));
    }

    #[test]
    fn test_from_raw_line_impossible_date_is_fatal() {
        let line = "32-13-2026 21:16:10 C PROCYON B 10250 10246 10254 10250";
        assert!(matches!(
            from_raw_line(line),
            Err(PhotfitError::ParsingRawRecordError(
                ParseRecordError::InvalidTimestamp(_)
            ))
        ));
    }
}
