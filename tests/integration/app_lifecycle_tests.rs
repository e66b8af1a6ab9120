/*!
 * Integration tests for the application lifecycle
 */

use anyhow::Result;
use bisplit::app_config::Config;
use bisplit::app_controller::Controller;
use crate::common;

/// Test the configuration load path used at startup: write a config file,
/// read it back and build a controller from it
#[test]
fn test_lifecycle_withConfigFile_shouldBuildController() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let config = Config::default();
    let config_json = serde_json::to_string_pretty(&config)?;
    let config_path = common::create_test_file(&dir, "conf.json", &config_json)?;

    let loaded: Config = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
    loaded.validate()?;

    let controller = Controller::with_config(loaded)?;
    assert!(controller.is_initialized());

    Ok(())
}

/// Test a full default-config run end to end, then a repeat run that skips
#[test]
fn test_lifecycle_withRepeatRuns_shouldRunThenSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let (translated, source) = common::create_aligned_pair(&dir)?;

    let controller = Controller::new_for_test()?;

    let first = controller.run(translated.clone(), source.clone(), dir.clone(), false)?;
    assert!(first.is_some());

    let second = controller.run(translated, source, dir, false)?;
    assert!(second.is_none());

    Ok(())
}

/// Test that an invalid configuration is rejected before any run
#[test]
fn test_lifecycle_withInvalidConfig_shouldFailValidation() {
    let mut config = Config::default();
    config.target_language = "xyz".to_string();

    assert!(config.validate().is_err());
}
