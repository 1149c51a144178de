use std::path::PathBuf;

use production_mix::config::{Config, ConfigError, InputError, Validate};
use production_mix::ProductionRequest;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("production.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::from_file(write_config(&dir, "")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.request, ProductionRequest::default());
    assert_eq!(config.output.currency, "Rp");
    assert_eq!(config.output.samples, 100);
}

#[test]
fn partial_file_overrides_given_keys_only() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [request.first]
        unit_profit = 45

        [request.material]
        name = "Wood"
        unit = "m3"
        available = 95.5

        [output]
        currency = "$"
        chart = "out/region.svg"
        "#,
    );
    let config = Config::from_file(path).unwrap();
    assert_eq!(config.request.first.name, "Produk A");
    assert_eq!(config.request.first.unit_profit, 45.);
    assert_eq!(config.request.second, ProductionRequest::default().second);
    assert_eq!(config.request.material.name, "Wood");
    assert_eq!(config.request.material.unit, "m3");
    assert_eq!(config.request.material.per_unit_first, 1.);
    assert_eq!(config.request.material.available, 95.5);
    assert_eq!(config.output.currency, "$");
    assert_eq!(config.output.chart, Some(PathBuf::from("out/region.svg")));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn negative_profit_is_accepted() {
    let config = Config::from_toml_str("[request.second]\nunit_profit = -12\n").unwrap();
    assert_eq!(config.request.second.unit_profit, -12.);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn negative_availability_is_rejected() {
    let config = Config::from_toml_str("[request.time]\navailable = -100\n").unwrap();
    assert_eq!(
        config.validate(),
        Err(InputError::Negative {
            field: "request.time.available".into(),
            value: -100.
        })
    );
}

#[test]
fn empty_product_name_is_rejected() {
    let config = Config::from_toml_str("[request.first]\nname = \"  \"\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(InputError::EmptyName { field }) if field == "request.first.name"
    ));
}

#[test]
fn unknown_keys_are_errors() {
    assert!(matches!(
        Config::from_toml_str("[request.first]\nprofit = 30\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn non_numeric_values_are_errors() {
    assert!(matches!(
        Config::from_toml_str("[request.time]\navailable = \"lots\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}
