/*!
 * Tests for application controller functionality
 */

use anyhow::Result;
use bisplit::app_config::Config;
use bisplit::app_controller::Controller;
use crate::common;

/// Test creating a controller with the default configuration
#[test]
fn test_newForTest_shouldCreateInitializedController() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test creating a controller with a specific configuration
#[test]
fn test_withConfig_withValidConfig_shouldCreateController() -> Result<()> {
    let config = Config::default();
    let controller = Controller::with_config(config)?;
    assert!(controller.is_initialized());
    Ok(())
}

/// Test that a controller with blank languages reports uninitialized
#[test]
fn test_isInitialized_withBlankLanguages_shouldReturnFalse() -> Result<()> {
    let mut config = Config::default();
    config.source_language = String::new();

    let controller = Controller::with_config(config)?;

    assert!(!controller.is_initialized());
    Ok(())
}

/// Test that a missing input file fails the run
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let source = common::create_source_track(&dir, "movie.en.srt", 2)?;
    let controller = Controller::new_for_test()?;

    let result = controller.run(
        dir.join("does_not_exist.srt"),
        source,
        dir.clone(),
        false,
    );

    assert!(result.is_err());
    Ok(())
}

/// Test that a non-subtitle input file fails the run
#[test]
fn test_run_withNonSubtitleInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let not_srt = common::create_test_file(&dir, "notes.txt", "just some notes")?;
    let source = common::create_source_track(&dir, "movie.en.srt", 2)?;
    let controller = Controller::new_for_test()?;

    let result = controller.run(not_srt, source, dir.clone(), false);

    assert!(result.is_err());
    Ok(())
}

/// Test that existing outputs are skipped unless overwrite is forced
#[test]
fn test_run_withExistingOutputs_shouldSkipWithoutForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (translated, source) = common::create_aligned_pair(&dir)?;
    let controller = Controller::new_for_test()?;

    let first = controller.run(translated.clone(), source.clone(), dir.clone(), false)?;
    assert!(first.is_some());

    // Second run sees the outputs and skips
    let second = controller.run(translated.clone(), source.clone(), dir.clone(), false)?;
    assert!(second.is_none());

    // Forced run overwrites
    let third = controller.run(translated, source, dir, true)?;
    assert!(third.is_some());

    Ok(())
}
