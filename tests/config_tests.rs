use std::io::Write;

use predarena::config::Config;
use predarena::domain::{DecayParams, ScoringParams};
use predarena::error::{ConfigError, Error};

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_all_sections_from_file() {
    let toml = r#"
[scoring]
time_weight_lambda = 0.5

[decay]
inactivity_threshold_days = 14
decay_mu = 0.02
min_decay_factor = 0.25

[standings]
top_n = 25

[logging]
level = "debug"
format = "json"
"#;

    let file = write_temp_config(toml);
    let config = Config::load(file.path()).unwrap();

    assert_eq!(
        config.scoring_params(),
        ScoringParams {
            time_weight_lambda: 0.5
        }
    );
    assert_eq!(
        config.decay_params(),
        DecayParams {
            inactivity_threshold_days: 14,
            decay_mu: 0.02,
            min_decay_factor: 0.25,
        }
    );
    assert_eq!(config.standings.top_n, 25);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_decay_floor_above_one() {
    let file = write_temp_config("[decay]\nmin_decay_factor = 1.5\n");
    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "min_decay_factor",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid decay floor error, got {err}"),
        Ok(config) => panic!(
            "Expected decay floor to be rejected, got {}",
            config.decay.min_decay_factor
        ),
    }
}

#[test]
fn config_rejects_negative_decay_rate() {
    let file = write_temp_config("[decay]\ndecay_mu = -0.01\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "decay_mu",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_top_n() {
    let file = write_temp_config("[standings]\ntop_n = 0\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue { field: "top_n", .. }))
    ));
}

#[test]
fn config_rejects_blank_log_level() {
    let file = write_temp_config("[logging]\nlevel = \"  \"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField { field: "level" }))
    ));
}

#[test]
fn config_reports_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_installs_json_logging_once() {
    let file = write_temp_config("[logging]\nlevel = \"warn\"\nformat = \"json\"\n");
    let config = Config::load(file.path()).expect("load config");

    config.init_logging().expect("first install succeeds");

    assert!(matches!(
        config.init_logging(),
        Err(Error::Config(ConfigError::Logging(_)))
    ));
}
