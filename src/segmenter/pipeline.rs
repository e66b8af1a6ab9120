/*!
 * Re-segmentation pipeline for an aligned pair of subtitle tracks.
 *
 * Walks both tracks positionally, builds a split plan per translated entry,
 * re-splits the paired source text at the plan's boundary positions, and
 * redistributes each pair's time interval evenly across the produced parts.
 * Output entries on both tracks share one running index sequence starting
 * at 1.
 */

use log::{debug, warn};

use crate::app_config::PairingPolicy;
use crate::errors::SubtitleError;
use crate::segmenter::resplitter::resplit_at_positions;
use crate::segmenter::splitter::{build_split_plan, SplitPlan, DEFAULT_MIN_RUN_LENGTH};
use crate::subtitle_processor::SubtitleEntry;

/// Sequential index source for output entries.
///
/// Threaded explicitly through a run so both output tracks draw from the
/// same sequence; never global state.
#[derive(Debug, Clone)]
pub struct IndexAllocator {
    next: usize,
}

impl IndexAllocator {
    /// Start a fresh sequence at 1
    pub fn new() -> Self {
        IndexAllocator { next: 1 }
    }

    /// Hand out the next index
    pub fn allocate(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices handed out so far
    pub fn allocated(&self) -> usize {
        self.next - 1
    }
}

impl Default for IndexAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tunables for one re-segmentation run
#[derive(Debug, Clone)]
pub struct ResegmentOptions {
    /// Minimum ideograph run length for the splitter
    pub min_run_length: usize,

    /// How to pair tracks of differing length
    pub pairing: PairingPolicy,
}

impl Default for ResegmentOptions {
    fn default() -> Self {
        ResegmentOptions {
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            pairing: PairingPolicy::default(),
        }
    }
}

/// Output of re-segmenting an aligned track pair
#[derive(Debug, Clone)]
pub struct ResegmentOutcome {
    /// Re-segmented translated-track entries
    pub translated: Vec<SubtitleEntry>,

    /// Re-segmented source-track entries
    pub source: Vec<SubtitleEntry>,

    /// Entry pairs consumed from the inputs
    pub pairs_processed: usize,

    /// Pairs that actually split into sub-captions
    pub pairs_split: usize,
}

impl ResegmentOutcome {
    /// Entries emitted per output track
    pub fn entries_emitted(&self) -> usize {
        self.translated.len()
    }
}

/// Re-segment an aligned pair of tracks.
///
/// Entries are paired positionally, ignoring stored sequence numbers. The
/// progress callback receives `(completed_pairs, total_pairs)` after each
/// pair.
pub fn resegment_tracks(
    translated: &[SubtitleEntry],
    source: &[SubtitleEntry],
    options: &ResegmentOptions,
    mut progress: impl FnMut(usize, usize),
) -> Result<ResegmentOutcome, SubtitleError> {
    if translated.len() != source.len() {
        match options.pairing {
            PairingPolicy::Strict => {
                return Err(SubtitleError::TrackLengthMismatch {
                    translated_len: translated.len(),
                    source_len: source.len(),
                });
            }
            PairingPolicy::Truncate => {
                warn!(
                    "Track lengths differ ({} translated, {} source), pairing the first {}",
                    translated.len(),
                    source.len(),
                    translated.len().min(source.len())
                );
            }
        }
    }

    let total_pairs = translated.len().min(source.len());
    let mut allocator = IndexAllocator::new();
    let mut outcome = ResegmentOutcome {
        translated: Vec::with_capacity(total_pairs),
        source: Vec::with_capacity(total_pairs),
        pairs_processed: total_pairs,
        pairs_split: 0,
    };

    for (completed, (translated_entry, source_entry)) in
        translated.iter().zip(source.iter()).enumerate()
    {
        let plan = build_split_plan(&translated_entry.text, options.min_run_length);

        if plan.is_split() {
            debug!(
                "Entry {} splits into {} parts",
                translated_entry.seq_num,
                plan.len()
            );
            outcome.pairs_split += 1;
            emit_split_pair(translated_entry, source_entry, &plan, &mut allocator, &mut outcome);
        } else {
            emit_unsplit_pair(translated_entry, source_entry, &mut allocator, &mut outcome);
        }

        progress(completed + 1, total_pairs);
    }

    Ok(outcome)
}

/// Emit one pair unchanged; each side keeps its own timing
fn emit_unsplit_pair(
    translated_entry: &SubtitleEntry,
    source_entry: &SubtitleEntry,
    allocator: &mut IndexAllocator,
    outcome: &mut ResegmentOutcome,
) {
    let index = allocator.allocate();

    outcome.translated.push(SubtitleEntry::new(
        index,
        translated_entry.start_time_ms,
        translated_entry.end_time_ms,
        translated_entry.text.clone(),
    ));
    outcome.source.push(SubtitleEntry::new(
        index,
        source_entry.start_time_ms,
        source_entry.end_time_ms,
        source_entry.text.clone(),
    ));
}

/// Emit the sub-captions for a split pair.
///
/// Both sides take their timing from the translated entry, divided evenly
/// with millisecond truncation; the last part always ends exactly at the
/// original end.
fn emit_split_pair(
    translated_entry: &SubtitleEntry,
    source_entry: &SubtitleEntry,
    plan: &SplitPlan,
    allocator: &mut IndexAllocator,
    outcome: &mut ResegmentOutcome,
) {
    let parts = plan.len() as u64;
    let start = translated_entry.start_time_ms;
    let duration = translated_entry.duration_ms();

    let source_fragments = resplit_at_positions(&source_entry.text, &plan.interior_positions());

    for (i, (fragment, source_text)) in plan
        .fragments
        .iter()
        .zip(source_fragments.iter())
        .enumerate()
    {
        let i = i as u64;
        let part_start = start + i * duration / parts;
        let part_end = start + (i + 1) * duration / parts;
        let index = allocator.allocate();

        outcome.translated.push(SubtitleEntry::new(
            index,
            part_start,
            part_end,
            fragment.text.clone(),
        ));
        outcome.source.push(SubtitleEntry::new(
            index,
            part_start,
            part_end,
            source_text.clone(),
        ));
    }
}
