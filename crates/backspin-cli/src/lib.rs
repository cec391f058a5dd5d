//! Backspin CLI library.
//!
//! This crate provides the command implementations behind the `backspin`
//! binary: reversing audio files, reversing raw recordings, and inspecting the
//! WAV files they produce.

pub mod commands;
pub mod config;
