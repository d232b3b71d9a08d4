use camino::Utf8Path;
use photfit::stars::display::StarResultsDisplayExt;
use photfit::{ObservationSet, PhotValue, ReductionParams};

mod common;
use common::assert_defined_close;

#[test]
fn test_reduce_raw_file_end_to_end() {
    let set = ObservationSet::new_from_raw(Utf8Path::new("tests/data/procyon.raw")).unwrap();
    let results = set.reduce_all_stars(&ReductionParams::default());

    let procyon = results.get("PROCYON").unwrap();
    assert_eq!(procyon.n_b, 2);
    assert_eq!(procyon.n_v, 1);
    assert_defined_close(procyon.b_magnitude, -10.004280210147954, 1e-12);
    assert_defined_close(procyon.v_magnitude, -10.748822722865967, 1e-12);
    assert_defined_close(procyon.b_v, 0.744542512718013, 1e-9);
    assert_defined_close(procyon.temperature, 3441.208374009938, 1e-9);

    // V-only star: defined V magnitude, undefined everywhere downstream of B
    let alpha = results.get("ALPHA CMI").unwrap();
    assert_eq!(alpha.n_b, 0);
    assert_eq!(alpha.n_v, 1);
    assert_eq!(alpha.b_magnitude, PhotValue::Undefined);
    assert_defined_close(alpha.v_magnitude, -10.748495825170375, 1e-12);
    assert_eq!(alpha.b_v, PhotValue::Undefined);
    assert_eq!(alpha.temperature, PhotValue::Undefined);

    // "Sky" measured exactly at the background level: nothing is derivable
    let sky_star = results.get("Sky").unwrap();
    assert_eq!(sky_star.b_magnitude, PhotValue::Undefined);
    assert_eq!(sky_star.v_magnitude, PhotValue::Undefined);
    assert_eq!(sky_star.b_v, PhotValue::Undefined);
    assert_eq!(sky_star.temperature, PhotValue::Undefined);
}

#[test]
fn test_reduce_raw_file_clip_sky_toggle() {
    let set = ObservationSet::new_from_raw(Utf8Path::new("tests/data/sky_outlier.raw")).unwrap();

    // sky B series [210, 210, 210, 210, 300]: mean 228, population std 36, and the
    // outlier sits exactly on the 2-sigma bound
    let plain = set.reduce_all_stars(&ReductionParams::default());
    let procyon = plain.get("PROCYON").unwrap();
    assert_defined_close(procyon.b_magnitude, -10.002385996016145, 1e-12);
    assert_defined_close(procyon.v_magnitude, -10.748822722865967, 1e-12);

    let params = ReductionParams::builder().clip_sky(true).build().unwrap();
    let clipped = set.reduce_all_stars(&params);
    let procyon = clipped.get("PROCYON").unwrap();
    assert_defined_close(procyon.b_magnitude, -10.004334282022501, 1e-12);
    // the single-value sky V series empties under the clip and falls back to its mean
    assert_defined_close(procyon.v_magnitude, -10.748822722865967, 1e-12);
}

#[test]
fn test_results_table_renders_invalid_markers() {
    let set = ObservationSet::new_from_raw(Utf8Path::new("tests/data/procyon.raw")).unwrap();
    let results = set.reduce_all_stars(&ReductionParams::default());

    let rendered = results.show().sorted().to_string();
    assert!(rendered.contains("PROCYON"));
    assert!(rendered.contains("-10.004"));
    assert!(rendered.contains("3441"));
    assert!(rendered.contains("invalid"));
}
