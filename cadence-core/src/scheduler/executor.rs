//! Pulse pass executor
//!
//! Owns the channel table and the pass state machine. The machine is a
//! pure transition function: the timer-event binding feeds it the
//! current counter value and carries out the pin actions and compare
//! deadline it returns. This keeps the whole scheduler testable on the
//! host; the shim only performs I/O.

use super::channel::Channel;
use super::{FRAME_PERIOD_TICKS, SETTLE_TICKS};
use crate::traits::OutputBank;

/// Errors returned by the configuration API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseError {
    /// Channel id outside the configured table
    InvalidChannel,
}

/// Where the scheduler is within the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PassState {
    /// Channel `i` is currently driving its pulse
    Pulsing(usize),
    /// All pulses emitted; waiting out the remainder of the frame
    Idle,
}

/// Hardware actions requested by one compare-match transition
///
/// The shim applies `set_low` strictly before `set_high`, resets the
/// free-running counter if asked, then arms the compare event at
/// `next_compare` (absolute ticks, relative to the possibly-reset
/// counter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerCommand {
    /// Pin whose pulse just elapsed
    pub set_low: Option<u8>,
    /// Pin whose pulse starts now
    pub set_high: Option<u8>,
    /// Reset the free-running counter before arming
    pub reset_counter: bool,
    /// Absolute tick at which the next compare event fires
    pub next_compare: u32,
}

impl TimerCommand {
    /// Apply the pin actions to an output bank
    ///
    /// Deassert before assert, so at most one channel is high across
    /// the transition.
    pub fn apply<B: OutputBank>(&self, bank: &mut B) {
        if let Some(pin) = self.set_low {
            bank.set_low(pin);
        }
        if let Some(pin) = self.set_high {
            bank.set_high(pin);
        }
    }
}

/// Multi-channel servo pulse scheduler
///
/// One instance per hardware timer. The configuration API runs in
/// foreground context; [`PulseScheduler::on_compare_match`] runs in the
/// timer-event context and only reads the channel table. `pulse_ticks`
/// is a multi-byte value shared across that boundary, so the instance
/// must live behind a critical-section lock (the firmware wraps it in
/// `Mutex<CriticalSectionRawMutex, RefCell<...>>`) - a torn read would
/// drive a pulse of corrupted duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseScheduler<const CHANNELS: usize> {
    channels: [Channel; CHANNELS],
    state: PassState,
}

impl<const CHANNELS: usize> PulseScheduler<CHANNELS> {
    /// Create a scheduler with all channels unbound
    ///
    /// Boots in [`PassState::Idle`]: the first compare event resets the
    /// counter and opens a clean frame.
    pub const fn new() -> Self {
        Self {
            channels: [Channel::new(); CHANNELS],
            state: PassState::Idle,
        }
    }

    /// Bind a channel to a logical output pin
    ///
    /// Re-arms the datasheet pulse range and clears trim.
    pub fn connect(&mut self, index: usize, pin: u8) -> Result<(), PulseError> {
        self.channel_mut(index)?.connect(pin);
        Ok(())
    }

    /// Update a channel's allowed pulse range (µs)
    ///
    /// A zero bound leaves the existing bound unchanged.
    pub fn set_limits(&mut self, index: usize, min_us: u16, max_us: u16) -> Result<(), PulseError> {
        self.channel_mut(index)?.set_limits(min_us, max_us);
        Ok(())
    }

    /// Set a channel's trim correction (µs)
    pub fn set_trim(&mut self, index: usize, trim_us: i16) -> Result<(), PulseError> {
        self.channel_mut(index)?.set_trim(trim_us);
        Ok(())
    }

    /// Command a new pulse width (µs)
    ///
    /// The effective width is `clamp(width_us + trim, min, max)`
    /// converted to ticks. Takes effect at that channel's next pulse
    /// start - never mid-pulse, because the running pass latched the
    /// previous value when the pulse began.
    pub fn set_pulse(&mut self, index: usize, width_us: u32) -> Result<(), PulseError> {
        self.channel_mut(index)?.command(width_us);
        Ok(())
    }

    /// Committed pulse width in ticks
    ///
    /// Diagnostics only; this system is open-loop.
    pub fn get_pulse(&self, index: usize) -> Result<u32, PulseError> {
        self.channels
            .get(index)
            .map(Channel::pulse_ticks)
            .ok_or(PulseError::InvalidChannel)
    }

    /// Current pass state
    pub fn state(&self) -> PassState {
        self.state
    }

    /// Number of channels in the table
    pub const fn channel_count(&self) -> usize {
        CHANNELS
    }

    fn channel_mut(&mut self, index: usize) -> Result<&mut Channel, PulseError> {
        self.channels.get_mut(index).ok_or(PulseError::InvalidChannel)
    }

    /// Advance the pass on a timer compare-match event
    ///
    /// `counter` is the free-running tick count at the moment the event
    /// fired. Bounded, constant-time, and infallible by construction:
    /// the transitions below keep the pulsing index inside the table.
    pub fn on_compare_match(&mut self, counter: u32) -> TimerCommand {
        let mut cmd = TimerCommand {
            set_low: None,
            set_high: None,
            reset_counter: false,
            next_compare: 0,
        };
        let mut now = counter;

        // Close out whatever this event terminates.
        let next_index = match self.state {
            PassState::Pulsing(index) => {
                cmd.set_low = self.channels[index].pin();
                index + 1
            }
            PassState::Idle => {
                // Frame elapsed: restart the counter, begin a fresh pass.
                cmd.reset_counter = true;
                now = 0;
                0
            }
        };

        if next_index < CHANNELS {
            let channel = &self.channels[next_index];
            cmd.set_high = channel.pin();
            cmd.next_compare = now + channel.pulse_ticks();
            self.state = PassState::Pulsing(next_index);
        } else {
            // Pass complete. Wait out the frame period, but never rob
            // the hardware of the settle margin on overrun.
            cmd.next_compare = if now + SETTLE_TICKS < FRAME_PERIOD_TICKS {
                FRAME_PERIOD_TICKS
            } else {
                now + SETTLE_TICKS
            };
            self.state = PassState::Idle;
        }

        cmd
    }
}

impl<const CHANNELS: usize> Default for PulseScheduler<CHANNELS> {
    fn default() -> Self {
        Self::new()
    }
}
