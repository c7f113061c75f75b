//! Canonical string rendering shared by every representation.
//!
//! The rule, applied to `(re, im)`:
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | either component NaN | `NaN` |
//! | `im == 0` | `re` |
//! | `re == 0` | `im` followed by `i` |
//! | `im < 0` | `re - (-im)i` |
//! | otherwise | `re + im i` |
//!
//! Components use the shortest decimal text that round-trips through `f64`,
//! always with a fractional part or an exponent (`3.0`, `0.25`, `1e20`).

use crate::kernel::{self, Parts};

/// Renders one real component.
///
/// Uses the `ryu` crate for the shortest round-tripping representation;
/// infinities render as `inf` / `-inf`.
pub(crate) fn component_repr(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_owned();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() {
            "-inf".to_owned()
        } else {
            "inf".to_owned()
        };
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format_finite(f).to_owned()
}

/// Renders a complex value with the canonical rule.
#[must_use]
pub fn complex_repr(z: Parts) -> String {
    if kernel::is_nan(z) {
        return "NaN".to_owned();
    }
    let (re, im) = z;
    if im == 0.0 {
        component_repr(re)
    } else if re == 0.0 {
        format!("{}i", component_repr(im))
    } else if im < 0.0 {
        format!("{} - {}i", component_repr(re), component_repr(-im))
    } else {
        format!("{} + {}i", component_repr(re), component_repr(im))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_text() {
        assert_eq!(component_repr(3.0), "3.0");
        assert_eq!(component_repr(-0.0), "-0.0");
        assert_eq!(component_repr(0.25), "0.25");
        assert_eq!(component_repr(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn canonical_rule() {
        assert_eq!(complex_repr((3.0, 0.0)), "3.0");
        assert_eq!(complex_repr((3.0, -0.0)), "3.0");
        assert_eq!(complex_repr((0.0, 2.0)), "2.0i");
        assert_eq!(complex_repr((1.0, 2.0)), "1.0 + 2.0i");
        assert_eq!(complex_repr((1.0, -2.0)), "1.0 - 2.0i");
        assert_eq!(complex_repr((f64::INFINITY, -1.5)), "inf - 1.5i");
        assert_eq!(complex_repr((f64::NAN, 1.0)), "NaN");
        assert_eq!(complex_repr((f64::INFINITY, f64::NAN)), "NaN");
    }
}
