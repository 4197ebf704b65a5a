//! Filesystem utilities for devbranch.
//!
//! Dev files are written into the working tree through an atomic replace so
//! an interrupted run never leaves a half-written file behind.

pub mod atomic;

pub use atomic::atomic_write;
