//! Platform abstraction layer
//!
//! Browser-only adapters for the simulation's collaborators:
//! - `canvas`: `RenderSurface` over a 2D canvas context
//! - `storage`: LocalStorage access and the persisted best time
//!
//! Native builds have no platform layer; they use `NullSurface` and
//! `MemoryStore` instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod storage;
