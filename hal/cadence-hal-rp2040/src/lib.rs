//! RP2040-specific shim for the Cadence servo driver
//!
//! Implements the core's output-bank capability over `embassy-rp` GPIO.
//! The timer capability needs no code here: the firmware's pulse task
//! realizes compare-match arming with the embassy time driver.

#![no_std]

pub mod bank;

pub use bank::ServoBank;
