/*!
 * Integration tests for the end-to-end re-segmentation workflow
 */

use anyhow::Result;
use bisplit::app_config::{Config, PairingPolicy};
use bisplit::app_controller::Controller;
use bisplit::file_utils::FileManager;
use bisplit::subtitle_processor::SubtitleTrack;
use crate::common;

/// Test a full run over the worked example pair: parse, split, retime,
/// renumber and write both tracks
#[test]
fn test_workflow_withAlignedPair_shouldWriteResegmentedTracks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (translated, source) = common::create_aligned_pair(&dir)?;
    let output_dir = dir.join("out");

    let controller = Controller::new_for_test()?;
    let summary = controller
        .run(translated, source, output_dir.clone(), false)?
        .expect("run should not skip");

    assert_eq!(summary.pairs_processed, 3);
    assert_eq!(summary.pairs_split, 1);
    assert_eq!(summary.entries_emitted, 4);
    assert_eq!(summary.translated_output, output_dir.join("movie.zh.zh.resplit.srt"));
    assert_eq!(summary.source_output, output_dir.join("movie.en.en.resplit.srt"));
    assert!(summary.translated_output.exists());
    assert!(summary.source_output.exists());

    let translated_out =
        SubtitleTrack::parse_srt_string(&FileManager::read_to_string(&summary.translated_output)?)?;
    let source_out =
        SubtitleTrack::parse_srt_string(&FileManager::read_to_string(&summary.source_output)?)?;

    assert_eq!(translated_out.len(), 4);
    assert_eq!(source_out.len(), 4);

    // Both tracks carry the same contiguous index sequence
    for (i, (t, s)) in translated_out.iter().zip(source_out.iter()).enumerate() {
        assert_eq!(t.seq_num, i + 1);
        assert_eq!(s.seq_num, i + 1);
    }

    // The unsplit first pair kept its timing
    assert_eq!(translated_out[0].text, "你好");
    assert_eq!(translated_out[0].format_start_time(), "00:00:01,000");
    assert_eq!(translated_out[0].format_end_time(), "00:00:04,000");

    // The worked example pair split in half, timing divided evenly
    assert_eq!(translated_out[1].text, "这是一个很长的中文字幕");
    assert_eq!(translated_out[1].format_start_time(), "00:00:10,000");
    assert_eq!(translated_out[1].format_end_time(), "00:00:15,000");
    assert_eq!(translated_out[2].text, "用来测试分割逻辑是否正常工作");
    assert_eq!(translated_out[2].format_start_time(), "00:00:15,000");
    assert_eq!(translated_out[2].format_end_time(), "00:00:20,000");

    // The source split at the nearest word boundary and shares the timing
    assert_eq!(source_out[1].text, "This is a long English subtitle used to");
    assert_eq!(source_out[2].text, "test whether the splitting logic works correctly");
    assert_eq!(source_out[1].format_start_time(), "00:00:10,000");
    assert_eq!(source_out[2].format_end_time(), "00:00:20,000");

    // The trailing unsplit pair follows
    assert_eq!(translated_out[3].text, "再见");
    assert_eq!(source_out[3].text, "Goodbye");

    Ok(())
}

/// Test that the truncate policy drops the longer track's tail
#[test]
fn test_workflow_withMismatchedTracksAndTruncate_shouldDropTail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let translated = common::create_source_track(&dir, "movie.zh.srt", 3)?;
    let source = common::create_source_track(&dir, "movie.en.srt", 2)?;

    let controller = Controller::new_for_test()?;
    let summary = controller
        .run(translated, source, dir.clone(), false)?
        .expect("run should not skip");

    assert_eq!(summary.pairs_processed, 2);
    assert_eq!(summary.entries_emitted, 2);

    Ok(())
}

/// Test that the strict policy fails the run and writes no output
#[test]
fn test_workflow_withMismatchedTracksAndStrict_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let translated = common::create_source_track(&dir, "movie.zh.srt", 3)?;
    let source = common::create_source_track(&dir, "movie.en.srt", 2)?;

    let mut config = Config::default();
    config.pairing = PairingPolicy::Strict;
    let controller = Controller::with_config(config)?;
    let output_dir = dir.join("out");

    let result = controller.run(translated, source, output_dir.clone(), false);

    assert!(result.is_err());
    assert!(!output_dir.join("movie.zh.zh.resplit.srt").exists());
    assert!(!output_dir.join("movie.en.en.resplit.srt").exists());

    Ok(())
}

/// Test that a malformed input track aborts the run with no output
#[test]
fn test_workflow_withMalformedTrack_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let translated = common::create_test_file(
        &dir,
        "movie.zh.srt",
        "1\n00:00:01,000 --> bogus\n你好\n\n",
    )?;
    let source = common::create_source_track(&dir, "movie.en.srt", 1)?;
    let output_dir = dir.join("out");

    let controller = Controller::new_for_test()?;
    let result = controller.run(translated, source, output_dir.clone(), false);

    assert!(result.is_err());
    assert!(!output_dir.join("movie.zh.zh.resplit.srt").exists());

    Ok(())
}
