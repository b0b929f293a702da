//! Pulse generation task
//!
//! Binds the hardware timer capability to the pass state machine:
//! sleep until the armed compare deadline, read the free-running
//! counter, run the transition inside the lock, carry out the pin
//! actions. The counter is the time elapsed since the pass origin,
//! re-based whenever the machine requests a counter reset.

use defmt::*;
use embassy_time::{Duration, Instant, Timer};

use cadence_core::scheduler::TICKS_PER_US;
use cadence_core::traits::OutputBank;
use cadence_hal_rp2040::ServoBank;

use crate::shared::{SCHEDULER, SERVO_COUNT};

/// Scheduler tick rate (2 ticks per µs)
const PULSE_TICK_HZ: u64 = TICKS_PER_US as u64 * 1_000_000;

/// Convert scheduler ticks to an embassy duration
///
/// Rounds up so a compare event never fires before its deadline.
fn ticks_to_duration(ticks: u32) -> Duration {
    let numer = u64::from(ticks) * embassy_time::TICK_HZ;
    Duration::from_ticks((numer + PULSE_TICK_HZ - 1) / PULSE_TICK_HZ)
}

/// Convert an embassy duration to scheduler ticks
fn duration_to_ticks(duration: Duration) -> u32 {
    (duration.as_ticks() * PULSE_TICK_HZ / embassy_time::TICK_HZ) as u32
}

/// Drives the servo outputs from compare-match deadlines
#[embassy_executor::task]
pub async fn pulse_task(mut bank: ServoBank<SERVO_COUNT>) {
    info!("Pulse task started");

    // Known-safe state before the first pass.
    bank.all_low();

    let mut origin = Instant::now();
    let mut next_compare: u32 = 0;

    loop {
        Timer::at(origin + ticks_to_duration(next_compare)).await;

        let counter = duration_to_ticks(Instant::now() - origin);
        let cmd = SCHEDULER.lock(|sched| sched.borrow_mut().on_compare_match(counter));

        if cmd.reset_counter {
            origin = Instant::now();
        }
        cmd.apply(&mut bank);

        next_compare = cmd.next_compare;
    }
}
