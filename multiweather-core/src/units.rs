//! Temperature scale conversions with absolute-zero validity bounds.
//!
//! Every function is total except for inputs below absolute zero, which
//! cannot describe a physical temperature and usually mean corrupted
//! upstream data. Those are rejected with [`OutOfRange`] instead of being
//! propagated.

use thiserror::Error;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_SHIFT: f64 = 273.15;

/// Absolute zero expressed in Fahrenheit.
const ABSOLUTE_ZERO_F: f64 = -459.67;

/// A conversion input was below absolute zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{conversion}: {value} is out of range")]
pub struct OutOfRange {
    conversion: &'static str,
    value: f64,
}

pub fn celsius_to_kelvin(c: f64) -> Result<f64, OutOfRange> {
    if c < -KELVIN_SHIFT {
        return Err(OutOfRange { conversion: "celsius_to_kelvin", value: c });
    }
    Ok(c + KELVIN_SHIFT)
}

pub fn kelvin_to_celsius(k: f64) -> Result<f64, OutOfRange> {
    if k < 0.0 {
        return Err(OutOfRange { conversion: "kelvin_to_celsius", value: k });
    }
    Ok(k - KELVIN_SHIFT)
}

pub fn fahrenheit_to_celsius(f: f64) -> Result<f64, OutOfRange> {
    if f < ABSOLUTE_ZERO_F {
        return Err(OutOfRange { conversion: "fahrenheit_to_celsius", value: f });
    }
    Ok((f - 32.0) * 5.0 / 9.0)
}

pub fn celsius_to_fahrenheit(c: f64) -> Result<f64, OutOfRange> {
    if c < -KELVIN_SHIFT {
        return Err(OutOfRange { conversion: "celsius_to_fahrenheit", value: c });
    }
    Ok((c * 9.0 / 5.0) + 32.0)
}

pub fn kelvin_to_fahrenheit(k: f64) -> Result<f64, OutOfRange> {
    if k < 0.0 {
        return Err(OutOfRange { conversion: "kelvin_to_fahrenheit", value: k });
    }
    Ok(((k - KELVIN_SHIFT) * 9.0 / 5.0) + 32.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn kelvin_celsius_roundtrip() {
        for k in [0.0, 255.37, 273.15, 293.15, 1000.0] {
            let c = kelvin_to_celsius(k).unwrap();
            assert_close(celsius_to_kelvin(c).unwrap(), k);
        }
    }

    #[test]
    fn celsius_fahrenheit_roundtrip() {
        for c in [-40.0, 0.0, 20.0, 37.0, 100.0] {
            let f = celsius_to_fahrenheit(c).unwrap();
            assert_close(fahrenheit_to_celsius(f).unwrap(), c);
        }
    }

    #[test]
    fn absolute_zero_is_still_valid() {
        assert_eq!(celsius_to_kelvin(-273.15).unwrap(), 0.0);
        assert_eq!(kelvin_to_celsius(0.0).unwrap(), -273.15);
        assert_close(fahrenheit_to_celsius(-459.67).unwrap(), -273.15);
    }

    #[test]
    fn below_absolute_zero_is_rejected() {
        assert!(celsius_to_kelvin(-273.16).is_err());
        assert!(celsius_to_fahrenheit(-273.16).is_err());
        assert!(kelvin_to_celsius(-0.01).is_err());
        assert!(kelvin_to_fahrenheit(-0.01).is_err());
        assert!(fahrenheit_to_celsius(-459.68).is_err());
    }

    #[test]
    fn known_fixed_points() {
        assert_close(fahrenheit_to_celsius(32.0).unwrap(), 0.0);
        assert_close(celsius_to_fahrenheit(100.0).unwrap(), 212.0);
        assert_close(kelvin_to_fahrenheit(273.15).unwrap(), 32.0);
        assert_close(kelvin_to_celsius(293.15).unwrap(), 20.0);
    }

    #[test]
    fn out_of_range_names_the_conversion() {
        let err = celsius_to_kelvin(-300.0).unwrap_err();
        assert!(err.to_string().contains("celsius_to_kelvin"));
    }
}
