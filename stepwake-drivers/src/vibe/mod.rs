//! Vibration motor drivers

pub mod motor;

pub use motor::VibeMotor;
