/*!
 * Subtitle entries, tracks and the SRT wire format.
 *
 * A track is the ordered entry list read from one file. Parsing follows the
 * block grammar strictly: numeric index line, `start --> end` timing line,
 * then text lines up to a blank line or end of input. Any deviation aborts
 * the parse with a typed error; there is no per-block recovery.
 */

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error, warn};

use crate::errors::SubtitleError;
use crate::timecode::{format_timecode, parse_timecode};

/// Single subtitle entry
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    /// Sequence number as stored in the file
    pub seq_num: usize,

    /// Start time in ms
    pub start_time_ms: u64,

    /// End time in ms
    pub end_time_ms: u64,

    /// Text content, internal newlines preserved
    pub text: String,
}

impl SubtitleEntry {
    /// Create a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Entry duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }

    /// Convert start time to formatted SRT timecode
    pub fn format_start_time(&self) -> String {
        format_timecode(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timecode
    pub fn format_end_time(&self) -> String {
        format_timecode(self.end_time_ms)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Ordered subtitle entries for one language
#[derive(Debug, Clone)]
pub struct SubtitleTrack {
    /// File the track was read from
    pub source_file: PathBuf,

    /// Entries in file order
    pub entries: Vec<SubtitleEntry>,

    /// ISO-639 language label
    pub language: String,
}

impl SubtitleTrack {
    /// Create an empty track
    pub fn new(source_file: PathBuf, language: String) -> Self {
        SubtitleTrack {
            source_file,
            entries: Vec::new(),
            language,
        }
    }

    /// Number of entries in the track
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read and parse an SRT file into a track
    pub fn parse_srt_file<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;

        let entries = Self::parse_srt_string(&content)
            .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

        debug!("Parsed {} entries from {}", entries.len(), path.display());

        Ok(SubtitleTrack {
            source_file: path.to_path_buf(),
            entries,
            language: language.to_string(),
        })
    }

    /// Parse SRT content into entries, strictly.
    ///
    /// A leading UTF-8 BOM and `\r\n` line endings are tolerated; entry
    /// order follows the file, and stored sequence numbers are kept as-is.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut entries = Vec::new();
        let mut lines = content.lines().enumerate();

        while let Some((index_line, line)) = lines.next() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            // Index line
            let seq_num: usize = trimmed.parse().map_err(|_| SubtitleError::MalformedBlock {
                line: index_line + 1,
                reason: format!("expected a numeric index line, found '{}'", trimmed),
            })?;

            // Timing line
            let (timing_line, timing) =
                lines.next().ok_or_else(|| SubtitleError::MalformedBlock {
                    line: index_line + 1,
                    reason: format!("block {} ends before its timing line", seq_num),
                })?;
            let timing = timing.trim();
            let (start_text, end_text) =
                timing
                    .split_once(" --> ")
                    .ok_or_else(|| SubtitleError::MalformedBlock {
                        line: timing_line + 1,
                        reason: format!("expected 'start --> end' timing line, found '{}'", timing),
                    })?;

            let start_time_ms = match parse_timecode(start_text.trim()) {
                Ok(ms) => ms,
                Err(e) => {
                    error!("Invalid start timecode at line {}: {}", timing_line + 1, e);
                    return Err(e);
                }
            };
            let end_time_ms = match parse_timecode(end_text.trim()) {
                Ok(ms) => ms,
                Err(e) => {
                    error!("Invalid end timecode at line {}: {}", timing_line + 1, e);
                    return Err(e);
                }
            };

            if start_time_ms > end_time_ms {
                return Err(SubtitleError::MalformedBlock {
                    line: timing_line + 1,
                    reason: format!(
                        "start timecode {} is after end timecode {}",
                        format_timecode(start_time_ms),
                        format_timecode(end_time_ms)
                    ),
                });
            }

            // Text lines until a blank line; end of input also closes the
            // block. Only the joined body is trimmed, so indentation inside
            // a multi-line caption survives
            let mut text_lines: Vec<&str> = Vec::new();
            for (_, text_line) in lines.by_ref() {
                if text_line.trim().is_empty() {
                    break;
                }
                text_lines.push(text_line);
            }

            let text = text_lines.join("\n").trim().to_string();
            if text.is_empty() {
                warn!("Entry {} has empty text", seq_num);
            }

            entries.push(SubtitleEntry::new(seq_num, start_time_ms, end_time_ms, text));
        }

        Ok(entries)
    }

    /// Render the track in SRT wire format
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            output.push_str(&entry.to_string());
        }
        output
    }
}
