//! Anshar engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the sample:
//! window/event-loop ownership, device and surface management, frame
//! acquisition, and thin typed wrappers over the GPU resources a scene needs
//! (depth target, mesh buffers, uniform blocks, 2-D textures).

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
