//! # Stars: per-object aggregation and reduction configuration
//!
//! High-level facilities to **ingest** and **store** photometer records grouped by star.
//! The central type is [`StarSet`], a fast hash map that buckets per-band count series
//! per star name, together with the sky background series accumulated alongside it in
//! [`ObservationSet`].
//!
//! Modules
//! -----------------
//! * [`raw_reader`](crate::stars::raw_reader) – Tolerant `.raw` photometer log reader.
//! * [`star_fit`](crate::stars::star_fit) – Magnitude/color/temperature reduction over a set
//!   (`StarFit` trait, per-star results).
//! * [`display`](crate::stars::display) – Table renderer for reduction results.
//!
//! Data Model
//! -----------------
//! * **Key:** [`StarName`] (trimmed object name; the `SKY` sentinel is never a key).
//! * **Value:** [`BandSeries`] = per-band `CountSeries` of per-record mean counts,
//!   insertion order = file order.
//! * **Set:** [`StarSet`] = `HashMap<StarName, BandSeries, ahash::RandomState>`.
//!
//! Lifecycle
//! -----------------
//! An [`ObservationSet`] is built in **one pass** over a single file and is immutable
//! thereafter; there is deliberately no appender that merges further files into an
//! existing set. Construct a fresh set per input file.

use std::collections::HashMap;

use ahash::RandomState;
use camino::Utf8Path;

use crate::constants::{CountSeries, Counts, StarName};
use crate::observations::FilterBand;
use crate::photfit_errors::PhotfitError;
use crate::stars::star_fit::{StarFit, StarResults};

pub mod display;
pub mod raw_reader;
pub mod star_fit;

/// A full set of count series for multiple stars.
///
/// The key is the [`StarName`] (trimmed object name).
/// The value is the per-band series of per-record mean counts for this star.
///
/// Uses [`ahash`](https://docs.rs/ahash) for fast hashing.
pub type StarSet = HashMap<StarName, BandSeries, RandomState>;

/// Per-band series of per-record mean counts, in file order.
///
/// Used both for a single star and for the sky background.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BandSeries {
    pub b: CountSeries,
    pub v: CountSeries,
}

impl BandSeries {
    /// The series for one band.
    pub fn series(&self, band: FilterBand) -> &CountSeries {
        match band {
            FilterBand::B => &self.b,
            FilterBand::V => &self.v,
        }
    }

    /// Number of records accumulated in one band.
    pub fn len(&self, band: FilterBand) -> usize {
        self.series(band).len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty() && self.v.is_empty()
    }

    pub(crate) fn push(&mut self, band: FilterBand, value: Counts) {
        match band {
            FilterBand::B => self.b.push(value),
            FilterBand::V => self.v.push(value),
        }
    }
}

/// All aggregates extracted from one `.raw` file: the per-star series and the sky
/// background series.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObservationSet {
    pub stars: StarSet,
    pub sky: BandSeries,
}

impl ObservationSet {
    /// Read a `.raw` photometer log and build the aggregates in one pass.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path to the `.raw` file
    ///
    /// Return
    /// ------
    /// * the finished [`ObservationSet`], or a fatal [`PhotfitError`] (missing file,
    ///   truncated header, I/O failure, unparseable field on a grammar-matched line)
    pub fn new_from_raw(path: &Utf8Path) -> Result<Self, PhotfitError> {
        raw_reader::extract_raw(path)
    }

    /// Reduce every star of the set against the file's sky background.
    ///
    /// Convenience over [`StarFit::reduce_all_stars`].
    pub fn reduce_all_stars(&self, params: &ReductionParams) -> StarResults {
        self.stars.reduce_all_stars(&self.sky, params)
    }
}

/// Configuration parameters controlling the statistical combination of count series.
///
/// Overview
/// -----------------
/// * `sigma_factor` – width of the outlier clip applied to star series, in population
///   standard deviations. The retention bound is strict (`|x − mean| < factor·σ`), so a
///   zero-deviation series empties and the reduction falls back to the unfiltered mean.
/// * `clip_sky` – whether the same clip+fallback also applies to the sky series. The
///   instrument's batch reduction never clipped the sky, so this defaults to `false`.
///
/// Defaults
/// -----------------
/// * `sigma_factor`: 2.0
/// * `clip_sky`: false
///
/// Example
/// -----------------
/// ```rust
/// use photfit::stars::ReductionParams;
///
/// let params = ReductionParams::builder()
///     .sigma_factor(2.5)
///     .clip_sky(true)
///     .build()
///     .unwrap();
/// assert_eq!(params.sigma_factor, 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct ReductionParams {
    /// Outlier clip width in population standard deviations.
    pub sigma_factor: f64,
    /// Apply the clip+fallback to the sky series as well.
    pub clip_sky: bool,
}

impl ReductionParams {
    /// Construct a new [`ReductionParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`ReductionParamsBuilder`] to configure custom parameters.
    pub fn builder() -> ReductionParamsBuilder {
        ReductionParamsBuilder::new()
    }
}

impl Default for ReductionParams {
    fn default() -> Self {
        ReductionParams {
            sigma_factor: 2.0,
            clip_sky: false,
        }
    }
}

/// Builder for [`ReductionParams`], with validation.
#[derive(Debug, Clone)]
pub struct ReductionParamsBuilder {
    params: ReductionParams,
}

impl Default for ReductionParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReductionParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: ReductionParams::default(),
        }
    }

    pub fn sigma_factor(mut self, v: f64) -> Self {
        self.params.sigma_factor = v;
        self
    }

    pub fn clip_sky(mut self, v: bool) -> Self {
        self.params.clip_sky = v;
        self
    }

    /// Validate and build the final [`ReductionParams`].
    pub fn build(self) -> Result<ReductionParams, PhotfitError> {
        if !self.params.sigma_factor.is_finite() || self.params.sigma_factor <= 0.0 {
            return Err(PhotfitError::InvalidReductionParams(format!(
                "sigma_factor must be finite and > 0, got {}",
                self.params.sigma_factor
            )));
        }
        Ok(self.params)
    }
}
