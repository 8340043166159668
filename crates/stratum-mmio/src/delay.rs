//! Busy-wait delay.

use core::hint::black_box;

/// Spins for approximately `count` decrement iterations.
///
/// Blocks the single thread of execution; there is nothing to yield to.
/// The loop has no effect other than elapsed time, so the counter passes
/// through [`black_box`] on every iteration, a compiler-visible barrier
/// that keeps the decrements in the emitted code. The wall-clock duration
/// of one iteration is a property of the target clock, not of this
/// function.
pub fn delay(count: u32) {
    let mut remaining = black_box(count);
    while remaining != 0 {
        remaining = black_box(remaining - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_terminates() {
        delay(0);
        delay(1);
        delay(10_000);
    }
}
