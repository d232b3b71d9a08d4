pub mod constants;
pub mod observations;
pub mod photfit_errors;
pub mod photometry;
pub mod stars;
pub mod statistics;
pub mod time;

pub use constants::{ColorIndex, Counts, CountSeries, Kelvin, Magnitude, StarName, MJD};
pub use observations::{FilterBand, Observation};
pub use photfit_errors::PhotfitError;
pub use photometry::PhotValue;
pub use stars::star_fit::{StarFit, StarReduction, StarResults};
pub use stars::{BandSeries, ObservationSet, ReductionParams, StarSet};
