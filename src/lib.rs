// Public API exports (shared between browser and native)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;

// Terminal client (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
