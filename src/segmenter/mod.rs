/*!
 * Re-segmentation of bilingual subtitle pairs.
 *
 * This module holds the core algorithm family:
 * - Splitting translated text at ideograph boundaries into timed fragments
 * - Re-splitting the paired source text at matching relative positions
 * - Redistributing timing and renumbering across both output tracks
 *
 * # Architecture
 *
 * - `splitter`: Builds a split plan for one translated entry
 * - `resplitter`: Cuts source text at a plan's boundary positions
 * - `pipeline`: Drives both over aligned tracks with a shared index sequence
 */

pub mod splitter;
pub mod resplitter;
pub mod pipeline;

// Re-export main types
pub use pipeline::{resegment_tracks, IndexAllocator, ResegmentOptions, ResegmentOutcome};
pub use resplitter::resplit_at_positions;
pub use splitter::{build_split_plan, SplitFragment, SplitPlan, DEFAULT_MIN_RUN_LENGTH};
