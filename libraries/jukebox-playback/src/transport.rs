//! Transport helpers: time labels, progress and seek arithmetic, volume

use std::time::Duration;

/// Format seconds as `m:ss`
///
/// Unknown (NaN or infinite) and negative values render as `0:00`.
///
/// ```
/// use jukebox_playback::transport::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(75.9), "1:15");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Position as a percentage of duration
///
/// Returns `0.0` while the duration is unknown or zero.
pub fn progress_percent(position: Duration, duration: Option<Duration>) -> f64 {
    match duration {
        Some(duration) if !duration.is_zero() => {
            (position.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// Target position for a seek to `percent` of `duration`
///
/// `percent` is clamped to `0..=100`. Unknown durations seek to the start.
pub fn seek_position(percent: f64, duration: Option<Duration>) -> Duration {
    let Some(duration) = duration else {
        return Duration::ZERO;
    };
    if percent.is_nan() {
        return Duration::ZERO;
    }

    duration
        .mul_f64(percent.clamp(0.0, 100.0) / 100.0)
        .min(duration)
}

/// Clamp a requested volume to `0.0..=1.0`
pub fn clamp_volume(volume: f64) -> f32 {
    if volume.is_nan() {
        return 0.0;
    }
    volume.clamp(0.0, 1.0) as f32
}
