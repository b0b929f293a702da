//! Hardware capability traits
//!
//! The scheduler core never touches registers. Chip shims implement
//! these traits and the firmware binds them to the pure state machine.

/// Logical output bank shared by all servo channels
///
/// `pin` identifies a slot on the bank; the implementation resolves it
/// to real hardware (a bit on a shared port, a GPIO in an array, ...).
pub trait OutputBank {
    /// Drive the pin high
    fn set_high(&mut self, pin: u8);

    /// Drive the pin low
    fn set_low(&mut self, pin: u8);

    /// Drive every pin low
    ///
    /// Used to reach a known-safe state before the first pass.
    fn all_low(&mut self);
}
