//! Numeric conversion helpers centralizing the lossy casts between uniform
//! draws, indices and counts.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Map a uniform draw in [0, 1) onto an index in `0..len`.
///
/// Out-of-range or non-finite draws are clamped, so the result is always a
/// valid index for a non-empty slice. Returns 0 when `len` is 0.
#[must_use]
pub fn unit_to_index(unit: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let scaled = (unit * usize_to_f64(len)).floor();
    cast::<f64, usize>(scaled).unwrap_or(0).min(len - 1)
}

/// Floor a scaled uniform draw into `0..span`, returning 0 for non-finite input.
#[must_use]
pub fn unit_to_span(unit: f64, span: u32) -> u32 {
    if !unit.is_finite() || span == 0 {
        return 0;
    }
    let scaled = (unit.clamp(0.0, 1.0) * f64::from(span)).floor();
    cast::<f64, u32>(scaled).unwrap_or(0).min(span - 1)
}

/// Fraction `count / total`, or 0.0 when `total` is 0.
#[must_use]
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    usize_to_f64(count) / usize_to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_to_index_stays_in_bounds() {
        assert_eq!(unit_to_index(0.0, 20), 0);
        assert_eq!(unit_to_index(0.999_999, 20), 19);
        assert_eq!(unit_to_index(1.0, 20), 19);
        assert_eq!(unit_to_index(-0.5, 20), 0);
        assert_eq!(unit_to_index(f64::NAN, 20), 0);
        assert_eq!(unit_to_index(0.5, 0), 0);
    }

    #[test]
    fn unit_to_span_floors() {
        assert_eq!(unit_to_span(0.0, 10), 0);
        assert_eq!(unit_to_span(0.95, 10), 9);
        assert_eq!(unit_to_span(1.0, 10), 9);
        assert_eq!(unit_to_span(f64::INFINITY, 10), 0);
    }

    #[test]
    fn ratio_handles_empty_total() {
        assert!((ratio(1, 4) - 0.25).abs() < f64::EPSILON);
        assert!(ratio(3, 0).abs() < f64::EPSILON);
    }
}
