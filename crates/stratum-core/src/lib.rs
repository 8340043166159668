//! # stratum-core
//!
//! Target-independent runtime primitives: the tier of the Stratum runtime
//! that every compiled program links against, regardless of whether it runs
//! on an operating system or on bare metal.
//!
//! Everything here is allocation-free (the optional [`heap`] module only
//! delegates to the global allocator) and depends on neither OS services
//! nor hardware access. No `unsafe` code is permitted at the crate level;
//! the two modules that must touch raw storage ([`fatal`], [`heap`]) carry
//! narrow module-level grants.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod ctype;
#[allow(unsafe_code)]
pub mod fatal;
pub mod fmt;
#[cfg(feature = "alloc")]
#[allow(unsafe_code)]
pub mod heap;
pub mod math;
pub mod parse;
pub mod string;
