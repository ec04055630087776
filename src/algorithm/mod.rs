/// Resumable backtracking walk and its step protocol
pub mod generator;
/// Forced single-neighbour placements
pub mod propagation;
/// Most-constrained-cell branching
pub mod selection;
/// Partial tilings and their occupancy queries
pub mod tiling;
/// Arena-backed search tree
pub mod tree;

pub use generator::{
    GenerationStats, GeneratorStatus, SearchConfig, StepResult, TilingGenerator,
    build_complete_tiling,
};
pub use tiling::Tiling;
