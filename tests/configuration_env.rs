//! Environment overrides for the configuration system
//!
//! Kept in its own test binary with a single test: it mutates the process
//! environment, which other tests read through `Config::load`.

use strukter::Config;

#[test]
fn test_env_overrides_take_precedence() {
    // SAFETY: the only test in this binary, no other thread reads the environment
    unsafe {
        std::env::set_var("STRUKTER__SERVER__PORT", "8080");
        std::env::set_var("STRUKTER__LOGGING__LEVEL", "debug");
        std::env::set_var("STRUKTER__EMAIL__SMTP_PASSWORD", "from-strukter-env");
        std::env::set_var("RESEND_API_KEY", "re_from_legacy_env");
    }

    let config = Config::load(Some("config/default.toml".to_owned())).expect("Failed to load config");

    // Environment wins over the file
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.level, "debug");
    // Untouched keys still come from the file
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.email.smtp_host, "smtp.resend.com");
    // RESEND_API_KEY wins over STRUKTER__EMAIL__SMTP_PASSWORD
    assert_eq!(config.email.smtp_password, "re_from_legacy_env");

    unsafe {
        std::env::remove_var("RESEND_API_KEY");
    }

    let config = Config::load(Some("config/default.toml".to_owned())).expect("Failed to load config");
    assert_eq!(config.email.smtp_password, "from-strukter-env");
}
