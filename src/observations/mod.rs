use std::fmt;
use std::str::FromStr;

use crate::constants::{Counts, StarName, MJD, SKY_SENTINEL, SUB_EXPOSURES};

/// Photometric filter band of a record.
///
/// Only the two standard bands of the instrument are valid; a line carrying any other
/// band letter does not match the record grammar and is skipped by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterBand {
    /// Blue filter
    B,
    /// Visual filter
    V,
}

impl fmt::Display for FilterBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterBand::B => write!(f, "B"),
            FilterBand::V => write!(f, "V"),
        }
    }
}

impl FromStr for FilterBand {
    type Err = String;

    /// Band letters are case-exact: `b`/`v` are not valid bands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(FilterBand::B),
            "V" => Ok(FilterBand::V),
            other => Err(format!("unknown filter band: {other}")),
        }
    }
}

/// A single parsed photometer record.
///
/// Transient: produced by the raw reader and consumed immediately by the aggregation
/// pass, which keeps only the mean of the four sub-exposure counts.
///
/// # Fields
///
/// * `target` - The trimmed object name (`SKY` marks a background measurement)
/// * `band` - The filter band of the measurement
/// * `time` - The observation timestamp as MJD (retained for ordering, unused by the math)
/// * `counts` - The four raw detector sub-exposure counts
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub target: StarName,
    pub band: FilterBand,
    pub time: MJD,
    pub counts: [u32; SUB_EXPOSURES],
}

impl Observation {
    /// Create a new observation
    ///
    /// Arguments
    /// ---------
    /// * `target`: the trimmed object name
    /// * `band`: the filter band
    /// * `time`: the observation timestamp as MJD
    /// * `counts`: the four raw sub-exposure counts
    ///
    /// Return
    /// ------
    /// * a new Observation struct
    pub fn new(target: StarName, band: FilterBand, time: MJD, counts: [u32; SUB_EXPOSURES]) -> Self {
        Observation {
            target,
            band,
            time,
            counts,
        }
    }

    /// Mean of the four sub-exposure counts.
    ///
    /// This is the irreversible per-record reduction: the individual counts are not kept
    /// past the aggregation pass.
    pub fn mean_counts(&self) -> Counts {
        self.counts.iter().map(|&c| c as f64).sum::<f64>() / SUB_EXPOSURES as f64
    }

    /// Whether this record is a sky background measurement (case-exact sentinel).
    pub fn is_sky(&self) -> bool {
        self.target == SKY_SENTINEL
    }
}

#[cfg(test)]
mod observations_test {
    use super::*;

    #[test]
    fn test_filter_band_from_str() {
        assert_eq!("B".parse::<FilterBand>(), Ok(FilterBand::B));
        assert_eq!("V".parse::<FilterBand>(), Ok(FilterBand::V));
        assert!("R".parse::<FilterBand>().is_err());
        assert!("b".parse::<FilterBand>().is_err());
        assert!("v".parse::<FilterBand>().is_err());
    }

    #[test]
    fn test_mean_counts() {
        let obs = Observation::new(
            "PROCYON".to_string(),
            FilterBand::B,
            61078.885104166664,
            [10250, 10246, 10254, 10250],
        );
        assert_eq!(obs.mean_counts(), 10250.0);
        assert!(!obs.is_sky());
    }

    #[test]
    fn test_sky_sentinel_is_case_exact() {
        let sky = Observation::new("SKY".to_string(), FilterBand::V, 0.0, [180, 178, 182, 184]);
        assert!(sky.is_sky());
        assert_eq!(sky.mean_counts(), 181.0);

        let not_sky = Observation::new("Sky".to_string(), FilterBand::V, 0.0, [1, 1, 1, 1]);
        assert!(!not_sky.is_sky());
    }
}
