//! # Magnitude, color index, and temperature derivation
//!
//! Pure reduction math turning per-band count series into photometric quantities.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - The [`PhotValue`] sentinel type carrying a derived quantity or its explicit
//!   `Undefined` state.
//! - [`calculate_magnitude`] – robust mean of the star series (2-sigma clip with
//!   fallback), sky subtraction, and the Pogson log formula.
//! - [`color_index`] – B−V from two magnitudes.
//! - [`estimate_temperature`] – empirical color-temperature polynomial.
//!
//! ## Undefined propagation
//! -----------------
//! Any quantity that cannot be computed (empty series, star signal at or below the sky
//! background) is [`PhotValue::Undefined`], and every downstream derivation maps
//! `Undefined` to `Undefined`. The sentinel is an explicit sum type rather than a
//! floating-point NaN, so equality and matching stay well-behaved.
//!
//! ## See also
//! ------------
//! * [`crate::statistics`] – mean / population standard deviation / sigma clip.
//! * [`crate::stars::ReductionParams`] – clip width and sky-clip toggle.
//! * [`crate::stars::star_fit`] – per-star application over a whole set.

use crate::constants::{Counts, POGSON_SCALE, TEMP_POLY};
use crate::stars::ReductionParams;
use crate::statistics::{mean, sigma_clip};

/// A derived photometric quantity, or its explicit undefined state.
///
/// `Undefined` marks a value that cannot be computed (empty input series, non-positive
/// log argument). It propagates through the derivation chain and is never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhotValue {
    Defined(f64),
    Undefined,
}

impl PhotValue {
    pub fn is_defined(&self) -> bool {
        matches!(self, PhotValue::Defined(_))
    }

    pub fn is_undefined(&self) -> bool {
        !self.is_defined()
    }

    /// The inner value, `None` when undefined.
    pub fn value(&self) -> Option<f64> {
        match self {
            PhotValue::Defined(v) => Some(*v),
            PhotValue::Undefined => None,
        }
    }
}

/// Sigma-clipped mean with fallback to the unfiltered mean.
///
/// The strict clip bound empties the series when the standard deviation is zero, so the
/// fallback is what makes constant series reducible at all. `None` only for empty input.
fn clipped_mean(values: &[Counts], sigma_factor: f64) -> Option<f64> {
    let kept = sigma_clip(values, sigma_factor);
    mean(&kept).or_else(|| mean(values))
}

/// Compute a magnitude from a star count series and the matching sky series.
///
/// The star series is combined with a sigma clip (width from
/// [`ReductionParams::sigma_factor`]) falling back to the plain mean when the clip
/// retains nothing. The sky series is combined with a plain mean, or with the same
/// clip+fallback when [`ReductionParams::clip_sky`] is set.
///
/// Arguments
/// ---------
/// * `star_counts`: per-record mean counts of the star in one band
/// * `sky_counts`: per-record mean counts of all sky measurements in that band
/// * `params`: statistical combination settings
///
/// Return
/// ------
/// * `Defined(-2.5 · log10(S_star − S_sky))`, or `Undefined` when either series is
///   empty or the star signal does not exceed the sky background
pub fn calculate_magnitude(
    star_counts: &[Counts],
    sky_counts: &[Counts],
    params: &ReductionParams,
) -> PhotValue {
    let Some(s_star) = clipped_mean(star_counts, params.sigma_factor) else {
        return PhotValue::Undefined;
    };
    let s_sky = if params.clip_sky {
        clipped_mean(sky_counts, params.sigma_factor)
    } else {
        mean(sky_counts)
    };
    let Some(s_sky) = s_sky else {
        return PhotValue::Undefined;
    };

    // log10 needs a strictly positive argument; physically the star signal
    // must exceed the background
    if s_star <= s_sky {
        return PhotValue::Undefined;
    }

    PhotValue::Defined(POGSON_SCALE * (s_star - s_sky).log10())
}

/// B−V color index from the two band magnitudes, `Undefined` unless both are defined.
pub fn color_index(b_magnitude: PhotValue, v_magnitude: PhotValue) -> PhotValue {
    match (b_magnitude, v_magnitude) {
        (PhotValue::Defined(b), PhotValue::Defined(v)) => PhotValue::Defined(b - v),
        _ => PhotValue::Undefined,
    }
}

/// Estimate the effective surface temperature in Kelvin from the B−V color index.
///
/// Evaluates `T = 10^(c0 + c1·BV + c2·BV² + c3·BV³)` with the coefficients of
/// [`TEMP_POLY`]. No domain validation beyond undefined propagation: extreme color
/// indices legitimately produce extreme temperatures and are returned as-is.
pub fn estimate_temperature(b_v: PhotValue) -> PhotValue {
    let PhotValue::Defined(bv) = b_v else {
        return PhotValue::Undefined;
    };
    let [c0, c1, c2, c3] = TEMP_POLY;
    let exponent = c0 + c1 * bv + c2 * (bv * bv) + c3 * (bv * bv * bv);
    PhotValue::Defined(10f64.powf(exponent))
}
