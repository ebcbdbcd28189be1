//! Experiment definitions. Each type's module path becomes its registry key.
mod common;
pub mod librispeech;
pub mod wsj;
