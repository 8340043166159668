//! Integer and floating-point math primitives.

pub mod float;
pub mod int;

pub use float::{
    abs_f32, abs_f64, ceil_f32, ceil_f64, cos_f32, cos_f64, exp_f32, exp_f64, floor_f32,
    floor_f64, log_f32, log_f64, pow_f32, pow_f64, round_f32, round_f64, sin_f32, sin_f64,
    sqrt_f32, sqrt_f64, tan_f32, tan_f64,
};
pub use int::{
    abs_i32, abs_i64, clamp_i32, clamp_i64, gcd_i32, gcd_i64, lcm_i32, lcm_i64, max_i32, max_i64,
    min_i32, min_i64,
};
