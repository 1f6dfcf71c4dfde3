use crate::trail::TrailConfig;

pub const DEFAULT_LAUNCH_DATE: &str = "2025-11-15T11:00:00-05:00";
pub const DEFAULT_LAUNCH_ZONE_LABEL: &str = "EST";

pub const PAGE_TITLE: &str = "TalentShare • Coming Soon";
pub const PAGE_DESCRIPTION: &str = "A preview of the upcoming TalentShare experience.";

pub const LOGO_PATH: &str = "/svg/ts-logo-wide.svg";
pub const LOGO_ALT: &str = "TalentShare";

pub const TAGLINE: &str = "Talent-Share is weaving a playground for experts, dreamers, and curious minds. Where live sessions, collaborative studios, and glowing reviews all meet in one orbit.";
pub const TAGLINE_HIGHLIGHT: &str = "Talent-Share";

/// Launch timestamp, overridable at build time with `LAUNCH_DATE`.
pub fn get_launch_date() -> &'static str {
    option_env!("LAUNCH_DATE").unwrap_or(DEFAULT_LAUNCH_DATE)
}

/// Human-readable zone suffix for the launch label (`LAUNCH_ZONE_LABEL`).
pub fn get_launch_zone_label() -> &'static str {
    option_env!("LAUNCH_ZONE_LABEL").unwrap_or(DEFAULT_LAUNCH_ZONE_LABEL)
}

pub fn trail_config() -> TrailConfig {
    trail_config_from(option_env!("TRAIL_THRESHOLD"))
}

fn trail_config_from(threshold: Option<&str>) -> TrailConfig {
    let defaults = TrailConfig::default();
    let threshold = match threshold.map(|raw| raw.trim().parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() && value >= 0.0 => value,
        Some(_) => {
            log::warn!("Ignoring invalid TRAIL_THRESHOLD, using {}", defaults.threshold);
            defaults.threshold
        }
        None => defaults.threshold,
    };
    TrailConfig {
        threshold,
        ..defaults
    }
}
