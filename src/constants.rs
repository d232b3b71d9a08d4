//! # Constants and type definitions for Photfit
//!
//! This module centralizes the **format constants**, **photometric constants**, and **common
//! type definitions** used throughout the `photfit` library.
//!
//! ## Overview
//!
//! - Raw photometer log format constants (header size, sky sentinel)
//! - Photometric constants (Pogson scale, color-temperature polynomial)
//! - Core type aliases used across the crate
//! - Container type for per-band count series
//!
//! These definitions are used by all main modules, including the raw reader, the statistical
//! reduction, and the display adaptor.

use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Raw photometer log format
// -------------------------------------------------------------------------------------------------

/// Number of instrument metadata lines at the top of a `.raw` file, skipped unconditionally
pub const HEADER_LINE_COUNT: usize = 4;

/// Minimum number of lines for a `.raw` file to be considered well-formed (header + data section)
pub const MIN_RAW_LINE_COUNT: usize = HEADER_LINE_COUNT + 1;

/// Reserved object name marking sky background measurements (case-exact, compared after trim)
pub const SKY_SENTINEL: &str = "SKY";

/// Number of detector sub-exposures per record
pub const SUB_EXPOSURES: usize = 4;

// -------------------------------------------------------------------------------------------------
// Photometric constants
// -------------------------------------------------------------------------------------------------

/// Pogson scale factor relating flux ratios to magnitude differences
pub const POGSON_SCALE: f64 = -2.5;

/// Coefficients of the empirical color-temperature polynomial, lowest order first.
///
/// `T = 10^(c0 + c1·BV + c2·BV² + c3·BV³)` with `T` in Kelvin.
pub const TEMP_POLY: [f64; 4] = [3.988, -0.881, 0.769, -0.537];

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Mean detector counts for one record (arbitrary detector units)
pub type Counts = f64;
/// Apparent magnitude
pub type Magnitude = f64;
/// B−V color index in magnitudes
pub type ColorIndex = f64;
/// Effective temperature in Kelvin
pub type Kelvin = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Trimmed target identifier used as the grouping key
pub type StarName = String;

/// A small, inline-optimized series of per-record mean counts for one band.
///
/// Insertion order is file order.
pub type CountSeries = SmallVec<[Counts; 8]>;
