//! Demo sweep task
//!
//! Sweeps the commanded pulse width across the servo range on every
//! channel, exercising the foreground configuration path against the
//! running pulse task.

use defmt::*;
use embassy_time::{Duration, Ticker};

use cadence_core::scheduler::{MAX_PULSE_US, MIN_PULSE_US};

use crate::shared::{SCHEDULER, SERVO_COUNT};

/// Width step per frame (µs)
const STEP_US: u32 = 10;

/// Ramps all channels from one end of the pulse range to the other
#[embassy_executor::task]
pub async fn sweep_task() {
    info!("Sweep task started");

    let mut ticker = Ticker::every(Duration::from_millis(20));
    let mut width = u32::from(MIN_PULSE_US);
    let mut rising = true;

    loop {
        SCHEDULER.lock(|sched| {
            let mut sched = sched.borrow_mut();
            for index in 0..SERVO_COUNT {
                if let Err(e) = sched.set_pulse(index, width) {
                    warn!("set_pulse({}) failed: {:?}", index, e);
                }
            }
        });

        if rising {
            width += STEP_US;
            if width >= u32::from(MAX_PULSE_US) {
                rising = false;
            }
        } else {
            width -= STEP_US;
            if width <= u32::from(MIN_PULSE_US) {
                rising = true;
            }
        }

        ticker.next().await;
    }
}
