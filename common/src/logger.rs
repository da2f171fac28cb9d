use log::*;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub fn log_level_from_str(level: &str) -> LevelFilter {
  match level.to_lowercase().as_str() {
    "trace" => LevelFilter::Trace,
    "debug" => LevelFilter::Debug,
    "info" => LevelFilter::Info,
    "warn" => LevelFilter::Warn,
    "error" => LevelFilter::Error,
    _ => LevelFilter::Info,
  }
}

/// Whole-hour offset such as `"+2"` or `"-5"`. `None` when unparsable or out of range.
pub fn utc_offset_from_str(hours: &str) -> Option<time::UtcOffset> {
  let hours = hours.trim().parse::<i8>().ok()?;
  time::UtcOffset::from_hms(hours, 0, 0).ok()
}

/// Terminal logger configured from `LOG_LEVEL` and, optionally, `LOG_UTC_OFFSET` (whole hours).
/// Without an explicit offset the local offset is used, falling back to UTC.
pub fn init_logger() {
  let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
  let log_level = log_level_from_str(&log_level);

  let mut cfg = ConfigBuilder::new();
  let offset = std::env::var("LOG_UTC_OFFSET")
    .ok()
    .and_then(|hours| utc_offset_from_str(&hours));
  match offset {
    Some(offset) => {
      cfg.set_time_offset(offset);
    }
    None => {
      let _ = cfg.set_time_offset_to_local();
    }
  }
  let cfg = cfg.build();

  // a second init (tests, repeated binaries in one process) keeps the first logger
  if let Err(e) = TermLogger::init(log_level, cfg, TerminalMode::Mixed, ColorChoice::Auto) {
    eprintln!("Logger already initialized: {}", e);
  }
}

#[test]
fn parses_log_levels() {
  assert_eq!(log_level_from_str("DEBUG"), LevelFilter::Debug);
  assert_eq!(log_level_from_str("warn"), LevelFilter::Warn);
  assert_eq!(log_level_from_str("verbose"), LevelFilter::Info);
}

#[test]
fn parses_utc_offsets() {
  assert_eq!(utc_offset_from_str("+2").map(|o| o.whole_hours()), Some(2));
  assert_eq!(utc_offset_from_str(" -5 ").map(|o| o.whole_hours()), Some(-5));
  assert_eq!(utc_offset_from_str("0"), Some(time::UtcOffset::UTC));
  assert!(utc_offset_from_str("30").is_none());
  assert!(utc_offset_from_str("+02:00").is_none());
  assert!(utc_offset_from_str("").is_none());
}
