//! Platform abstraction layer
//!
//! The simulation and driver are platform-free; this is where a host wires
//! them to real input, clocks and a renderer.
//! - `web`: wasm-bindgen boundary for a browser canvas renderer

#[cfg(target_arch = "wasm32")]
pub mod web;
