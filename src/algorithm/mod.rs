/// Claimed-tile tracking for first-found-wins group acceptance
pub mod claims;
/// Tile connectivity graph construction
pub mod connectivity;
/// Composite deduplication by exact pixel equality
pub mod dedup;
/// 2x2 composite group resolution and compositing
pub mod grouping;
/// Mutual nearest-neighbor border matching
pub mod matching;
/// Pipeline orchestration and result assembly
pub mod reconstructor;

pub use reconstructor::{Reconstruction, ReconstructionConfig, reconstruct};
