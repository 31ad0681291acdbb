use gift_config::{Config, ConfigError, ConfigManager, Theme};
use gift_domain::SortOrder;
use tempfile::tempdir;

#[test]
fn default_config_matches_storefront_slider() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "₹");
    assert_eq!(cfg.default_max_price, 3000);
    assert_eq!(cfg.price_floor, 500);
    assert_eq!(cfg.price_ceiling, 3000);
    assert_eq!(cfg.price_step, 100);
    assert_eq!(cfg.default_sort, SortOrder::Name);
    assert!(cfg.price_in_range(500));
    assert!(!cfg.price_in_range(3100));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("default_sort", "price-desc").expect("set sort");
    cfg.set("default_max_price", "1500").expect("set price");
    cfg.set("theme", "plain").expect("set theme");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert!(manager.config_path().ends_with("config/config.json"));
    assert_eq!(loaded.default_sort, SortOrder::PriceDesc);
    assert_eq!(loaded.default_max_price, 1500);
    assert_eq!(loaded.theme, Theme::Plain);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    let loaded = manager.load().expect("defaults");

    assert_eq!(loaded.default_max_price, 3000);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "locale": "en-GB", "theme": null }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");

    assert_eq!(loaded.locale, "en-GB");
    assert_eq!(loaded.theme, Theme::Iconic);
    assert_eq!(loaded.price_ceiling, 3000);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn set_rejects_out_of_range_and_unknown_keys() {
    let mut cfg = Config::default();

    assert!(matches!(
        cfg.set("default_max_price", "9000"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("high_contrast", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("last_opened_ledger", "x"),
        Err(ConfigError::UnknownKey(_))
    ));

    cfg.set("price_ceiling", "2000").expect("lower ceiling");
    assert_eq!(cfg.default_max_price, 2000);
}

#[test]
fn empty_object_is_a_valid_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").expect("write");

    let loaded = ConfigManager::new(path).load().expect("load");

    assert_eq!(loaded.locale, "en-IN");
    assert_eq!(loaded.default_sort, SortOrder::Name);
}

#[test]
fn price_step_is_a_settable_preference() {
    let mut cfg = Config::default();

    cfg.set("price_step", "50").expect("set step");
    assert_eq!(cfg.price_step, 50);
    assert!(Config::KEYS.contains(&"price_step"));
    assert!(matches!(
        cfg.set("price_step", "0"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(cfg.price_step, 50);
}

#[test]
fn slider_always_reaches_the_ceiling() {
    let mut cfg = Config::default();
    cfg.set("price_floor", "550").expect("raise floor");

    assert!(cfg.price_on_slider(3000));
    assert!(cfg.price_on_slider(650));
    assert!(!cfg.price_on_slider(600));
    assert!(!cfg.price_on_slider(500));
}

#[test]
fn unknown_theme_is_rejected() {
    let mut cfg = Config::default();
    cfg.set("theme", "PLAIN").expect("plain");
    assert_eq!(cfg.theme, Theme::Plain);

    assert!(matches!(
        cfg.set("theme", "neon"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(cfg.theme, Theme::Plain);
}
