//! # stratum-mmio
//!
//! The bare-metal tier of the Stratum runtime: typed, address-fixed
//! hardware register access and a busy-wait delay. There is no OS below
//! this crate; every side effect is a literal load or store to a
//! documented physical address.
//!
//! Single thread of control throughout. The library takes no locks; code
//! that introduces a second accessor (an interrupt handler, another core)
//! must provide its own exclusion around these calls.
//!
//! This crate is only linked into embedded builds; the facade crate's
//! feature gating keeps it unreachable from hosted programs.

#![no_std]

pub mod delay;
pub mod periph;
pub mod reg;

pub use delay::delay;
pub use periph::{GPIOA, GPIOB, GPIOC, GPIOD, GpioPort, PinMode, RCC, Rcc};
pub use reg::{ReadOnly, ReadWrite, Reg, WriteOnly};

/// Routes the core fatal path to a board-provided byte channel (debug
/// UART, semihosting) and trap.
pub fn install_fatal_channel(write: fn(&[u8]), trap: fn() -> !) {
    stratum_core::fatal::install_fatal_hooks(write, trap);
}

/// Parks the processor forever. The fallback trap for boards with no
/// dedicated abort mechanism.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
