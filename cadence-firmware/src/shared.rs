//! Shared scheduler state
//!
//! The single scheduler instance, shared between the foreground
//! configuration path and the pulse task. The critical-section mutex is
//! the scoped interrupt-disable guard around multi-step writes:
//! `pulse_ticks` is a multi-byte value, and a torn read in the pulse
//! path would drive an output for a corrupted duration.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use cadence_core::scheduler::PulseScheduler;

/// Number of servo channels driven by this board
pub const SERVO_COUNT: usize = 2;

/// The pulse scheduler - one instance per hardware timer
pub static SCHEDULER: Mutex<CriticalSectionRawMutex, RefCell<PulseScheduler<SERVO_COUNT>>> =
    Mutex::new(RefCell::new(PulseScheduler::new()));
