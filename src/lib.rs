// Domain layer - the automaton engine, free of any window or input code
pub mod domain;

// Application layer - session state and pixel/cell mapping
pub mod application;

// Configuration - YAML settings and CLI overrides
pub mod config;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Engine, EngineError, Grid, Pattern, presets};
pub use application::{Session, Viewport};
pub use config::Settings;
