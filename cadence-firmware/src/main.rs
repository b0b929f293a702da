//! Cadence - multi-servo pulse driver firmware
//!
//! RP2040 binary driving hobby servos from a single timer: the pulse
//! task walks the channel table raising each output for its commanded
//! width and idling out the rest of the 20 ms frame, while a demo task
//! sweeps the commanded widths through the foreground API.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use cadence_hal_rp2040::ServoBank;

use crate::shared::SCHEDULER;

mod shared;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Cadence firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Drivetrain servos on GP2/GP3, constructed low. Bank slot index
    // doubles as the scheduler's logical pin id.
    let bank = ServoBank::new([
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
    ]);

    SCHEDULER.lock(|sched| {
        let mut sched = sched.borrow_mut();
        for (channel, slot) in [(0usize, 0u8), (1, 1)] {
            if let Err(e) = sched.connect(channel, slot) {
                warn!("connect({}) failed: {:?}", channel, e);
            }
        }
    });

    spawner.spawn(tasks::pulse::pulse_task(bank)).unwrap();
    spawner.spawn(tasks::sweep::sweep_task()).unwrap();

    info!("Cadence firmware ready");
}
