/*!
 * Application controller for bilingual subtitle re-segmentation.
 *
 * Drives one run end to end: validates the two input files, parses both
 * tracks, re-segments them through the pipeline with a progress bar, and
 * writes both output tracks atomically.
 */

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::app_config::Config;
use crate::file_utils::{FileManager, FileType};
use crate::language_utils;
use crate::segmenter::{resegment_tracks, ResegmentOptions};
use crate::subtitle_processor::SubtitleTrack;

/// Main application controller for subtitle re-segmentation
pub struct Controller {
    /// App configuration
    config: Config,
}

/// Statistics for one completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Entry pairs consumed from the inputs
    pub pairs_processed: usize,

    /// Pairs that split into sub-captions
    pub pairs_split: usize,

    /// Entries written per output track
    pub entries_emitted: usize,

    /// Path of the re-segmented translated track
    pub translated_output: PathBuf,

    /// Path of the re-segmented source track
    pub source_output: PathBuf,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the re-segmentation workflow over one translated/source file pair.
    ///
    /// Returns `None` when outputs already exist and overwrite is off.
    pub fn run(
        &self,
        translated_file: PathBuf,
        source_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<Option<RunSummary>> {
        let start_time = Instant::now();

        self.check_input_file(&translated_file)?;
        self.check_input_file(&source_file)?;
        FileManager::ensure_dir(&output_dir)?;

        let target_label = self.resolve_language_label(&self.config.target_language);
        let source_label = self.resolve_language_label(&self.config.source_language);

        let translated_output = FileManager::generate_output_path(
            &translated_file,
            &output_dir,
            &target_label,
            "resplit.srt",
        );
        let source_output =
            FileManager::generate_output_path(&source_file, &output_dir, &source_label, "resplit.srt");

        if (translated_output.exists() || source_output.exists()) && !force_overwrite {
            warn!("Skipping pair, output already exists (use -f to force overwrite)");
            return Ok(None);
        }

        let target_name = language_utils::get_language_name(&self.config.target_language)
            .unwrap_or_else(|_| self.config.target_language.clone());
        let source_name = language_utils::get_language_name(&self.config.source_language)
            .unwrap_or_else(|_| self.config.source_language.clone());
        info!(
            "Translated track: {} ({})",
            translated_file.display(),
            target_name
        );
        info!("Source track: {} ({})", source_file.display(), source_name);

        let translated_track =
            SubtitleTrack::parse_srt_file(&translated_file, &self.config.target_language)?;
        let source_track = SubtitleTrack::parse_srt_file(&source_file, &self.config.source_language)?;

        if translated_track.is_empty() || source_track.is_empty() {
            warn!(
                "Nothing to pair: {} translated entries, {} source entries",
                translated_track.len(),
                source_track.len()
            );
        }

        let total_pairs = translated_track.len().min(source_track.len()) as u64;
        let progress_bar = ProgressBar::new(total_pairs);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        info!("Re-segmenting, please wait…");
        progress_bar.set_message("Re-segmenting");

        let options = ResegmentOptions {
            min_run_length: self.config.split.min_run_length,
            pairing: self.config.pairing,
        };

        let pb = progress_bar.clone();
        let outcome = resegment_tracks(
            &translated_track.entries,
            &source_track.entries,
            &options,
            move |completed, _total| {
                pb.set_position(completed as u64);
            },
        )?;

        progress_bar.finish_and_clear();

        let summary = RunSummary {
            pairs_processed: outcome.pairs_processed,
            pairs_split: outcome.pairs_split,
            entries_emitted: outcome.entries_emitted(),
            translated_output: translated_output.clone(),
            source_output: source_output.clone(),
        };

        let mut translated_out =
            SubtitleTrack::new(translated_output.clone(), self.config.target_language.clone());
        translated_out.entries = outcome.translated;
        let mut source_out =
            SubtitleTrack::new(source_output.clone(), self.config.source_language.clone());
        source_out.entries = outcome.source;

        FileManager::write_atomic(&translated_output, &translated_out.serialize())
            .context("Failed to write re-segmented translated track")?;
        info!("Success: {}", translated_output.display());

        FileManager::write_atomic(&source_output, &source_out.serialize())
            .context("Failed to write re-segmented source track")?;
        info!("Success: {}", source_output.display());

        if summary.pairs_split > 0 {
            info!(
                "Split {} of {} pairs, {} entries per track",
                summary.pairs_split, summary.pairs_processed, summary.entries_emitted
            );
        } else {
            info!(
                "No pair needed splitting ({} pairs processed)",
                summary.pairs_processed
            );
        }

        info!(
            "Re-segmentation completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(Some(summary))
    }

    /// Validate that an input exists and looks like a subtitle file
    fn check_input_file(&self, path: &Path) -> Result<()> {
        if !FileManager::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }

        let file_type = FileManager::detect_file_type(path)?;
        if file_type != FileType::Subtitle {
            return Err(anyhow!("Input file is not an SRT subtitle file: {:?}", path));
        }

        Ok(())
    }

    /// Normalize a language code for the output filename, falling back to
    /// the raw code when it cannot be normalized
    fn resolve_language_label(&self, code: &str) -> String {
        match language_utils::normalize_to_part1_or_part2t(code) {
            Ok(label) => label,
            Err(e) => {
                warn!("Language code issue: {}", e);
                code.to_lowercase()
            }
        }
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
