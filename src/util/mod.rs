//! Shared utilities for the viewer.

/// Per-frame delta time and smoothed FPS.
pub mod frame_timing;
