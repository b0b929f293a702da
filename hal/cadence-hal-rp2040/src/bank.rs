//! Shared servo output bank
//!
//! Resolves the scheduler's logical pin ids to RP2040 GPIOs. A logical
//! pin id is simply a slot index in the bank.

use cadence_core::traits::OutputBank;
use embassy_rp::gpio::Output;

/// Fixed bank of servo output pins
pub struct ServoBank<const N: usize> {
    outputs: [Output<'static>; N],
}

impl<const N: usize> ServoBank<N> {
    /// Build a bank from already-configured outputs
    ///
    /// Construct the outputs low so the bank starts in the idle state.
    pub fn new(outputs: [Output<'static>; N]) -> Self {
        Self { outputs }
    }

    /// Number of slots in the bank
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the bank has no slots
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> OutputBank for ServoBank<N> {
    // Unknown ids are ignored: the pulse path has no error channel.
    fn set_high(&mut self, pin: u8) {
        if let Some(out) = self.outputs.get_mut(usize::from(pin)) {
            out.set_high();
        }
    }

    fn set_low(&mut self, pin: u8) {
        if let Some(out) = self.outputs.get_mut(usize::from(pin)) {
            out.set_low();
        }
    }

    fn all_low(&mut self) {
        for out in &mut self.outputs {
            out.set_low();
        }
    }
}
