//! Servo pulse scheduler
//!
//! Multiplexes several independent pulse-width outputs through a single
//! compare-match timer. Each pass raises every channel's output in index
//! order for its commanded width, then idles until the frame period
//! elapses.

pub mod channel;
pub mod executor;

pub use channel::{Channel, MAX_PULSE_US, MID_PULSE_US, MIN_PULSE_US};
pub use executor::{PassState, PulseError, PulseScheduler, TimerCommand};

/// Hardware timer ticks per microsecond (timer clocked at 2 MHz)
pub const TICKS_PER_US: u32 = 2;

/// Minimum duration of one full pass, in ticks (20 ms servo frame)
pub const FRAME_PERIOD_TICKS: u32 = 20_000 * TICKS_PER_US;

/// Idle margin guaranteed between two passes, in ticks
///
/// If the summed pulse widths overrun the frame period, the next pass
/// still waits this long after the last pulse.
pub const SETTLE_TICKS: u32 = 5;
