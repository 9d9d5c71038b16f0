//! Adapters Layer: SRT Socket Option Setters
//!
//! Provides implementations of [`SocketOptionSetter`] for the SRT
//! configuration engine.
//!
//! ## Overview
//!
//! The `adapters_socket` crate provides:
//! - **libsrt**: The real transport library, loaded at runtime with `libloading`
//! - **Recording**: An in-memory setter for dry runs and tests
//!
//! ## Architecture
//!
//! This crate is part of the adapters layer. It depends on:
//! - `usecases_srt_configure`: For the setter port and socket handles
//! - `entities_srt_options`: For option identifiers and value decoding
//!
//! ## See Also
//!
//! - [`usecases_srt_configure`](../usecases_srt_configure/index.html): Configuration phases

pub mod libsrt;
pub mod recording;

pub use libsrt::{LibSrt, LibSrtError};
pub use recording::{RecordedOption, RecordingSetter};
pub use usecases_srt_configure::SocketOptionSetter;
