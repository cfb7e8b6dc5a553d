//! Visual theme for ServiceDock.

mod styles;

pub use styles::GLOBAL_STYLES;
