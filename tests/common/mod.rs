use approx::assert_relative_eq;
use photfit::PhotValue;

/// Assert that a photometric value is defined and close to `expected`.
pub fn assert_defined_close(actual: PhotValue, expected: f64, max_relative: f64) {
    let PhotValue::Defined(value) = actual else {
        panic!("expected Defined({expected}), got {actual:?}");
    };
    assert_relative_eq!(value, expected, max_relative = max_relative);
}
