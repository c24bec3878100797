// src/report.rs - Console summary of a comparison

use crate::body::Body;
use crate::comparison::ComparisonResult;
use colored::Colorize;
use std::fmt;

/// Rendered in place of infinite or NaN values.
pub const SENTINEL: &str = "—";

/// Formats a signed duration with the largest unit that keeps it above 1.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return SENTINEL.to_string();
    }
    let magnitude = seconds.abs();
    if magnitude == 0.0 {
        "0 s".to_string()
    } else if magnitude < 1.0e-6 {
        format!("{:.3} ns", seconds * 1.0e9)
    } else if magnitude < 1.0e-3 {
        format!("{:.3} µs", seconds * 1.0e6)
    } else if magnitude < 1.0 {
        format!("{:.3} ms", seconds * 1.0e3)
    } else if magnitude < 86_400.0 {
        format!("{:.3} s", seconds)
    } else {
        format!("{:.3} days", seconds / 86_400.0)
    }
}

pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.15}", ratio)
    } else {
        SENTINEL.to_string()
    }
}

pub struct ComparisonReport<'a> {
    pub body: &'a Body,
    pub result: &'a ComparisonResult,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(body: &'a Body, result: &'a ComparisonResult) -> Self {
        ComparisonReport { body, result }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let r = self.result;
        let mut rows = vec![
            ("observer", r.mode.label()),
            ("radius", format!("{:.4e} m", r.observer.radius_m)),
            ("speed", format!("{:.1} m/s", r.observer.speed_m_per_s)),
            ("formula", format!("{:?}", r.observer.formula)),
            ("f_body", format_ratio(r.f_body)),
            ("f_earth", format_ratio(r.f_earth)),
            ("R", format_ratio(r.ratio)),
            ("per Earth day", format_seconds(r.per_day_seconds)),
            ("1 Earth s on body", format_seconds(r.earth_second_in_body)),
            ("1 body s on Earth", format_seconds(r.body_second_in_earth)),
            ("1 Earth h on body", format_seconds(r.earth_hour_in_body)),
            ("1 body h on Earth", format_seconds(r.body_hour_in_earth)),
        ];
        if r.is_frozen() {
            rows.push(("note", "observer is at or inside the event horizon".to_string()));
        }
        rows
    }

    /// Same rows as `Display`, with gains in green, losses in red and
    /// sentinels dimmed.
    pub fn colored_lines(&self) -> Vec<String> {
        let gaining = self.result.per_day_seconds > 0.0;
        let mut lines = vec![format!("{} ({})", self.body.name.bold(), self.body.kind.as_str())];

        for (label, value) in self.rows() {
            let value = if value == SENTINEL {
                value.dimmed()
            } else if label == "per Earth day" && gaining {
                value.green()
            } else if label == "per Earth day" {
                value.red()
            } else {
                value.normal()
            };
            lines.push(format!("  {:<18} {}", label.cyan(), value));
        }
        lines
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.body.name, self.body.kind.as_str())?;
        for (label, value) in self.rows() {
            writeln!(f, "  {:<18} {}", label, value)?;
        }
        Ok(())
    }
}
