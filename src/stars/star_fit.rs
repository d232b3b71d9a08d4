//! # Batch photometric reduction over a star set
//!
//! The [`StarFit`] trait runs the full derivation chain (B magnitude, V magnitude,
//! B−V color index, temperature estimate) over every star of a [`StarSet`] against
//! the file's sky background, collecting per-star [`StarReduction`] results.
//!
//! Results are **per-star independent**: a star with too few measurements or a signal
//! at the sky level yields [`PhotValue::Undefined`] fields without affecting the other
//! stars.

use std::collections::HashMap;

use ahash::RandomState;

use crate::constants::StarName;
use crate::observations::FilterBand;
use crate::photometry::{calculate_magnitude, color_index, estimate_temperature, PhotValue};
use crate::stars::{BandSeries, ReductionParams, StarSet};

/// Reduced photometric quantities for one star.
///
/// # Fields
///
/// * `n_b` / `n_v` - Number of records aggregated per band
/// * `b_magnitude` / `v_magnitude` - Band magnitudes from the sky-subtraction log formula
/// * `b_v` - Color index, defined iff both magnitudes are
/// * `temperature` - Effective temperature estimate in Kelvin, defined iff `b_v` is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarReduction {
    pub n_b: usize,
    pub n_v: usize,
    pub b_magnitude: PhotValue,
    pub v_magnitude: PhotValue,
    pub b_v: PhotValue,
    pub temperature: PhotValue,
}

/// Per-star reduction results, keyed by star name.
pub type StarResults = HashMap<StarName, StarReduction, RandomState>;

pub trait StarFit {
    /// Reduce **every star** in the set against the sky background and collect the results.
    ///
    /// Each `(StarName → BandSeries)` pair is processed with the same configuration:
    /// band magnitudes from [`calculate_magnitude`], then the color index and the
    /// temperature estimate, with undefined values propagating through the chain.
    ///
    /// Arguments
    /// ---------
    /// * `sky`: the sky background series of the same file
    /// * `params`: statistical combination settings
    ///
    /// Return
    /// ------
    /// * A [`StarResults`] map with one [`StarReduction`] per star
    fn reduce_all_stars(&self, sky: &BandSeries, params: &ReductionParams) -> StarResults;

    /// Count the total number of aggregated records across all stars and bands.
    fn total_records(&self) -> usize;
}

impl StarFit for StarSet {
    fn reduce_all_stars(&self, sky: &BandSeries, params: &ReductionParams) -> StarResults {
        self.iter()
            .map(|(name, series)| {
                let b_magnitude =
                    calculate_magnitude(series.series(FilterBand::B), sky.series(FilterBand::B), params);
                let v_magnitude =
                    calculate_magnitude(series.series(FilterBand::V), sky.series(FilterBand::V), params);
                let b_v = color_index(b_magnitude, v_magnitude);
                let temperature = estimate_temperature(b_v);

                (
                    name.clone(),
                    StarReduction {
                        n_b: series.len(FilterBand::B),
                        n_v: series.len(FilterBand::V),
                        b_magnitude,
                        v_magnitude,
                        b_v,
                        temperature,
                    },
                )
            })
            .collect()
    }

    fn total_records(&self) -> usize {
        self.values().map(|series| series.b.len() + series.v.len()).sum()
    }
}
