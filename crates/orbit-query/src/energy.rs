use orbit_core::model::EnergyReading;

use crate::sentiment::Trend;

const MIN_READINGS: usize = 3;
const WINDOW: usize = 5;
const MIN_WINDOW_READINGS: usize = 2;
const MARGIN: f64 = 0.3;

/// Mean ordinal energy value over a history, 0 when empty.
pub fn energy_average(history: &[EnergyReading]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    mean(history)
}

/// Direction of energy over an oldest-first history.
///
/// Compares the last five readings with the five before them; fewer than three
/// readings overall, or fewer than two in either window, is `Stable`.
pub fn energy_trend(history: &[EnergyReading]) -> Trend {
    if history.len() < MIN_READINGS {
        return Trend::Stable;
    }

    let recent_start = history.len().saturating_sub(WINDOW);
    let older_start = recent_start.saturating_sub(WINDOW);
    let recent = &history[recent_start..];
    let older = &history[older_start..recent_start];
    if recent.len() < MIN_WINDOW_READINGS || older.len() < MIN_WINDOW_READINGS {
        return Trend::Stable;
    }

    let recent_avg = mean(recent);
    let older_avg = mean(older);
    if recent_avg > older_avg + MARGIN {
        Trend::Improving
    } else if recent_avg < older_avg - MARGIN {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean(readings: &[EnergyReading]) -> f64 {
    let total: i32 = readings.iter().map(|r| i32::from(r.energy.value())).sum();
    f64::from(total) / readings.len() as f64
}
