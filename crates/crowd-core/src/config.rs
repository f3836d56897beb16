use crate::constants::*;
use crate::error::{CrowdError, Result};

/// Runtime knobs for a [`Crowd`](crate::Crowd).
///
/// `Default` mirrors the constants in [`crate::constants`]. The web frontend
/// may override a subset from the page URL via [`CrowdConfig::apply_query`].
#[derive(Clone, Debug, PartialEq)]
pub struct CrowdConfig {
    pub creature_count: usize,
    pub person_probability: f32,
    pub local_panic_radius: f32,
    pub local_panic_secs: f32,
    pub touch_window_ms: f64,
    pub touch_threshold: usize,
    pub min_simultaneous_touches: usize,
    pub seed: Option<u64>,
}

impl Default for CrowdConfig {
    fn default() -> Self {
        Self {
            creature_count: CREATURE_COUNT,
            person_probability: PERSON_PROBABILITY,
            local_panic_radius: LOCAL_PANIC_RADIUS,
            local_panic_secs: LOCAL_PANIC_SECS,
            touch_window_ms: TOUCH_WINDOW_MS,
            touch_threshold: TOUCH_THRESHOLD,
            min_simultaneous_touches: MIN_SIMULTANEOUS_TOUCHES,
            seed: None,
        }
    }
}

impl CrowdConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.person_probability) {
            return Err(CrowdError::InvalidConfig(format!(
                "person_probability {} outside [0, 1]",
                self.person_probability
            )));
        }
        if !(self.local_panic_radius.is_finite() && self.local_panic_radius >= 0.0) {
            return Err(CrowdError::InvalidConfig(format!(
                "local_panic_radius {} must be finite and non-negative",
                self.local_panic_radius
            )));
        }
        if !(self.local_panic_secs.is_finite() && self.local_panic_secs >= 0.0) {
            return Err(CrowdError::InvalidConfig(format!(
                "local_panic_secs {} must be finite and non-negative",
                self.local_panic_secs
            )));
        }
        if !(self.touch_window_ms.is_finite() && self.touch_window_ms > 0.0) {
            return Err(CrowdError::InvalidConfig(format!(
                "touch_window_ms {} must be positive",
                self.touch_window_ms
            )));
        }
        if self.touch_threshold == 0 {
            return Err(CrowdError::InvalidConfig(
                "touch_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Override fields from a URL query string such as `?seed=7&count=80`.
    ///
    /// Unknown keys are ignored; a known key with an unparsable value is an error.
    pub fn apply_query(&mut self, query: &str) -> Result<()> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "seed" => self.seed = Some(parse_field(key, value)?),
                "count" => self.creature_count = parse_field(key, value)?,
                "dogs" => {
                    let dog_ratio: f32 = parse_field(key, value)?;
                    self.person_probability = 1.0 - dog_ratio;
                }
                "threshold" => self.touch_threshold = parse_field(key, value)?,
                _ => {}
            }
        }
        self.validate()
    }
}

fn parse_field<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CrowdError::InvalidConfig(format!("bad value {value:?} for {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CrowdConfig::default().validate().is_ok());
    }

    #[test]
    fn query_overrides_known_keys() {
        let mut cfg = CrowdConfig::default();
        cfg.apply_query("?seed=7&count=80&dogs=0.5&utm=x").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.creature_count, 80);
        assert!((cfg.person_probability - 0.5).abs() < 1e-6);
    }

    #[test]
    fn query_rejects_garbage_values() {
        let mut cfg = CrowdConfig::default();
        assert!(cfg.apply_query("count=lots").is_err());
        assert!(cfg.apply_query("dogs=2").is_err());
    }
}
