//! Central configuration constants for the grading front-end.

use std::time::Duration;

/// Archive extensions accepted as a package submission (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["zip"];

/// Upper bound of the validation score scale.
pub const MAX_SCORE: u32 = 100;

/// Default simulated latency of the mock validation call (milliseconds).
pub const DEFAULT_VALIDATION_DELAY_MS: u64 = 1_500;

/// Default simulated latency of the mock simulation call (milliseconds).
pub const DEFAULT_SIMULATION_DELAY_MS: u64 = 3_000;

/// Longest mock delay accepted from the command line or settings. 60 s.
pub const MAX_MOCK_DELAY_MS: u64 = 60_000;

/// Capacity of the channel carrying service results back to the UI thread.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Initial desktop window size.
pub const WINDOW_SIZE: [f32; 2] = [960.0, 680.0];

/// Minimum desktop window size.
pub const WINDOW_MIN_SIZE: [f32; 2] = [760.0, 520.0];

/// Clamp a requested mock delay into the allowed range.
pub fn clamp_delay_ms(v: u64) -> u64 {
    v.min(MAX_MOCK_DELAY_MS)
}

/// Convenience wrapper returning a clamped delay as a [`Duration`].
pub fn mock_delay(ms: u64) -> Duration {
    Duration::from_millis(clamp_delay_ms(ms))
}

/// Whether `file_name` carries one of the [`ACCEPTED_EXTENSIONS`].
pub fn has_accepted_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        None => false,
    }
}
