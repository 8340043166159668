//! # stratum
//!
//! Facade for the Stratum runtime. A program links the core tier plus
//! exactly one deployment tier, chosen at build time:
//!
//! - feature `hosted`: OS-backed file and stream services
//!   (re-exported as [`hosted`]).
//! - feature `embedded`: bare-metal register access and timing
//!   (re-exported as [`mmio`]).
//!
//! The two tiers are mutually exclusive capability sets, not optional
//! add-ons: a build that enables both, or neither, is rejected here
//! rather than producing a program that could reach services its target
//! does not have.

#![cfg_attr(not(feature = "hosted"), no_std)]

#[cfg(all(feature = "hosted", feature = "embedded"))]
compile_error!(
    "features `hosted` and `embedded` are mutually exclusive: a program \
     targets one deployment environment"
);

#[cfg(not(any(feature = "hosted", feature = "embedded")))]
compile_error!("enable exactly one of the `hosted` or `embedded` features");

pub use stratum_core::{ctype, fatal, fmt, math, parse, string};

#[cfg(feature = "hosted")]
pub use stratum_hosted as hosted;

#[cfg(feature = "embedded")]
pub use stratum_mmio as mmio;
