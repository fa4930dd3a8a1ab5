//! Core login flow for gatehouse.
//!
//! Authenticates a (username, password) pair against a stored credential
//! fingerprint, rotates a daily login token on success, and hands the values
//! to the HTTP layer for cookie issuance.
//!
//! ## Modules
//!
//! - [`auth`] — digest strategies, fingerprint/token derivation, orchestration
//! - [`database`] — credential store contract and its implementations
//! - [`hosting`] — actix-web login routes and cookie issuance

pub mod auth;
pub mod database;

#[cfg(feature = "database")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Opaque numeric account identifier. Immutable once assigned.
pub type UserId = i64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
