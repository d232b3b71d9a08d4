//! # Tabular display for reduction results
//!
//! A borrowing renderer to print a [`StarResults`] map as a **table**.
//!
//! ## Overview
//!
//! The entry point is the display adaptor [`StarResultsDisplay`]. It **borrows** the
//! results and renders a formatted table when used with Rust formatting (`{}`),
//! without cloning or moving data. Columns per star: number of B and V records, band
//! magnitudes, B−V color index, and the temperature estimate in Kelvin.
//!
//! Undefined quantities render as the `invalid` marker; this adaptor is the one place
//! allowed to turn [`PhotValue::Undefined`] into presentation text, so downstream code
//! never formats a partial number.
//!
//! Hash maps have no stable iteration order; use [`StarResultsDisplay::sorted`] to
//! order rows by star name.

use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::photometry::PhotValue;
use crate::stars::star_fit::StarResults;

/// Presentation marker for an undefined quantity.
const INVALID_MARKER: &str = "invalid";

fn fmt_value(value: PhotValue, precision: usize) -> String {
    match value.value() {
        Some(v) => format!("{v:.precision$}"),
        None => INVALID_MARKER.to_string(),
    }
}

/// Display adaptor to render a [`StarResults`] map as a table.
///
/// Render columns
/// -----------------
/// `Star | #B | #V | B mag | V mag | B−V | T [K]`
///
/// Magnitudes and the color index use 3 decimals, the temperature 0 decimals,
/// matching the instrument's reduction reports.
pub struct StarResultsDisplay<'a> {
    results: &'a StarResults,
    sorted: bool,
}

impl<'a> StarResultsDisplay<'a> {
    pub fn new(results: &'a StarResults) -> Self {
        Self {
            results,
            sorted: false,
        }
    }

    /// Print rows sorted by star name.
    pub fn sorted(mut self) -> Self {
        self.sorted = true;
        self
    }
}

impl fmt::Display for StarResultsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Star", "#B", "#V", "B mag", "V mag", "B−V", "T [K]",
            ]);

        let names: Vec<&String> = if self.sorted {
            self.results.keys().sorted().collect()
        } else {
            self.results.keys().collect()
        };

        for name in names {
            let red = &self.results[name];
            let mut row = Row::new();
            row.add_cell(Cell::new(name));
            for text in [
                red.n_b.to_string(),
                red.n_v.to_string(),
                fmt_value(red.b_magnitude, 3),
                fmt_value(red.v_magnitude, 3),
                fmt_value(red.b_v, 3),
                fmt_value(red.temperature, 0),
            ] {
                row.add_cell(Cell::new(text).set_alignment(CellAlignment::Right));
            }
            table.add_row(row);
        }

        write!(f, "{table}")
    }
}

/// Extension trait attaching the display adaptor to [`StarResults`].
pub trait StarResultsDisplayExt {
    /// Borrowing table renderer for the results.
    fn show(&self) -> StarResultsDisplay<'_>;
}

impl StarResultsDisplayExt for StarResults {
    fn show(&self) -> StarResultsDisplay<'_> {
        StarResultsDisplay::new(self)
    }
}

#[cfg(test)]
mod display_test {
    use super::*;
    use crate::stars::star_fit::StarReduction;

    fn sample_results() -> StarResults {
        let mut results = StarResults::default();
        results.insert(
            "PROCYON".to_string(),
            StarReduction {
                n_b: 2,
                n_v: 1,
                b_magnitude: PhotValue::Defined(-10.004280210147954),
                v_magnitude: PhotValue::Defined(-10.748822722865967),
                b_v: PhotValue::Defined(0.744542512718013),
                temperature: PhotValue::Defined(3441.208374009938),
            },
        );
        results.insert(
            "ALPHA CMI".to_string(),
            StarReduction {
                n_b: 0,
                n_v: 1,
                b_magnitude: PhotValue::Undefined,
                v_magnitude: PhotValue::Defined(-10.748495825170375),
                b_v: PhotValue::Undefined,
                temperature: PhotValue::Undefined,
            },
        );
        results
    }

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(PhotValue::Defined(0.744542512718013), 3), "0.745");
        assert_eq!(fmt_value(PhotValue::Defined(3441.208374009938), 0), "3441");
        assert_eq!(fmt_value(PhotValue::Undefined, 3), "invalid");
    }

    #[test]
    fn test_show_renders_values_and_markers() {
        let results = sample_results();
        let rendered = results.show().sorted().to_string();

        assert!(rendered.contains("PROCYON"));
        assert!(rendered.contains("-10.004"));
        assert!(rendered.contains("-10.749"));
        assert!(rendered.contains("0.745"));
        assert!(rendered.contains("3441"));

        // the undefined chain renders as markers, never as partial numbers
        assert!(rendered.contains("ALPHA CMI"));
        assert!(rendered.contains("invalid"));

        // sorted by name: ALPHA CMI row comes first
        let alpha_pos = rendered.find("ALPHA CMI").unwrap();
        let procyon_pos = rendered.find("PROCYON").unwrap();
        assert!(alpha_pos < procyon_pos);
    }
}
