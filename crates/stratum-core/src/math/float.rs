//! Floating-point math wrappers with IEEE-754 semantics.
//!
//! Pure delegations to a verified numeric backend: the `std` float
//! intrinsics when an OS is present, `libm` on bare metal. No numeric
//! algorithm lives in this module.

/// Square root of `x`.
#[inline]
pub fn sqrt_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrtf(x)
    }
}

/// Square root of `x`.
#[inline]
pub fn sqrt_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(x)
    }
}

/// `base` raised to `exp`.
#[inline]
pub fn pow_f32(base: f32, exp: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        base.powf(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::powf(base, exp)
    }
}

/// `base` raised to `exp`.
#[inline]
pub fn pow_f64(base: f64, exp: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        base.powf(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(base, exp)
    }
}

/// Sine of `x` (radians).
#[inline]
pub fn sin_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sinf(x)
    }
}

/// Sine of `x` (radians).
#[inline]
pub fn sin_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sin(x)
    }
}

/// Cosine of `x` (radians).
#[inline]
pub fn cos_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::cosf(x)
    }
}

/// Cosine of `x` (radians).
#[inline]
pub fn cos_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::cos(x)
    }
}

/// Tangent of `x` (radians).
#[inline]
pub fn tan_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.tan()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::tanf(x)
    }
}

/// Tangent of `x` (radians).
#[inline]
pub fn tan_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.tan()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::tan(x)
    }
}

/// Natural logarithm of `x`.
#[inline]
pub fn log_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.ln()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::logf(x)
    }
}

/// Natural logarithm of `x`.
#[inline]
pub fn log_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.ln()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::log(x)
    }
}

/// `e` raised to `x`.
#[inline]
pub fn exp_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.exp()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::expf(x)
    }
}

/// `e` raised to `x`.
#[inline]
pub fn exp_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.exp()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::exp(x)
    }
}

/// Largest integral value not greater than `x`.
#[inline]
pub fn floor_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.floor()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::floorf(x)
    }
}

/// Largest integral value not greater than `x`.
#[inline]
pub fn floor_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.floor()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::floor(x)
    }
}

/// Smallest integral value not less than `x`.
#[inline]
pub fn ceil_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.ceil()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::ceilf(x)
    }
}

/// Smallest integral value not less than `x`.
#[inline]
pub fn ceil_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.ceil()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::ceil(x)
    }
}

/// `x` rounded to the nearest integer, ties away from zero.
#[inline]
pub fn round_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::roundf(x)
    }
}

/// `x` rounded to the nearest integer, ties away from zero.
#[inline]
pub fn round_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::round(x)
    }
}

/// Absolute value of `x`.
#[inline]
pub fn abs_f32(x: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabsf(x)
    }
}

/// Absolute value of `x`.
#[inline]
pub fn abs_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_sanity() {
        assert_eq!(sqrt_f64(9.0), 3.0);
        assert_eq!(abs_f64(-3.5), 3.5);
        assert_eq!(ceil_f64(2.1), 3.0);
        assert_eq!(floor_f64(2.9), 2.0);
        assert_eq!(round_f64(2.5), 3.0);
        assert_eq!(pow_f64(2.0, 10.0), 1024.0);
    }

    #[test]
    fn float_transcendental_sanity() {
        assert!((sin_f64(0.0)).abs() < 1e-12);
        assert!((cos_f64(0.0) - 1.0).abs() < 1e-12);
        assert!((tan_f64(0.0)).abs() < 1e-12);
        assert!((log_f64(core::f64::consts::E) - 1.0).abs() < 1e-12);
        assert!((exp_f64(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn float_f32_sanity() {
        assert_eq!(sqrt_f32(16.0), 4.0);
        assert_eq!(abs_f32(-1.25), 1.25);
        assert_eq!(ceil_f32(0.1), 1.0);
    }
}
