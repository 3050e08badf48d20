use super::color::Rgb;
use crate::constants::{MATERIAL_COLOR, OBJECT_DISTANCE, PARTICLE_COUNT, PARTICLE_COUNT_MAX};

/// Mount-time settings. Defaults come from `constants.rs`; the page URL can
/// override a few of them (see [`SceneConfig::from_query`]).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub object_distance: f32,
    pub material_color: Rgb,
    pub show_debug_panel: bool,
    /// Fixed seed for the particle field; entropy when `None`.
    pub seed: Option<u64>,
    pub log_debug: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            object_distance: OBJECT_DISTANCE,
            material_color: Rgb::from_hex(MATERIAL_COLOR).unwrap_or(Rgb::WHITE),
            show_debug_panel: true,
            seed: None,
            log_debug: false,
        }
    }
}

impl SceneConfig {
    /// Apply overrides from a `location.search` string such as
    /// `?particles=500&seed=7&debug=0&color=ff8800&log=debug`.
    ///
    /// Unknown keys and malformed values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut cfg = Self::default();
        let query = search.trim_start_matches('?');
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "particles" => {
                    if let Ok(n) = value.parse::<usize>() {
                        if (1..=PARTICLE_COUNT_MAX).contains(&n) {
                            cfg.particle_count = n;
                        }
                    }
                }
                "seed" => {
                    if let Ok(s) = value.parse::<u64>() {
                        cfg.seed = Some(s);
                    }
                }
                "debug" => match value {
                    "0" | "false" | "off" => cfg.show_debug_panel = false,
                    "" | "1" | "true" | "on" => cfg.show_debug_panel = true,
                    _ => {}
                },
                "color" => {
                    // `#` arrives percent-encoded when written into a URL by hand
                    let hex = value.strip_prefix("%23").unwrap_or(value);
                    if let Ok(c) = Rgb::from_hex(hex) {
                        cfg.material_color = c;
                    }
                }
                "log" => cfg.log_debug = value.eq_ignore_ascii_case("debug"),
                _ => {}
            }
        }
        cfg
    }
}
