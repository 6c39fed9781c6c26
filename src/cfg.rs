//! Build time configuration.
//!
//! A CSR bundle has no process environment,
//! so the values are taken from the environment of the build.

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_SWAP_FACILITY_COORDINATES: bool = true;
const DEFAULT_REVIEWS_ENABLED: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
    pub api_url: &'static str,
    pub naver_map_client_id: Option<&'static str>,
    /// The backend delivers facility coordinates with
    /// latitude and longitude interchanged.
    pub swap_facility_coordinates: bool,
    pub reviews_enabled: bool,
}

impl Cfg {
    #[must_use]
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = option_env!("SPORTFINDER_API_URL").filter(|u| !u.trim().is_empty()) {
            cfg.api_url = url.trim_end_matches('/');
        }
        match option_env!("SPORTFINDER_NAVER_MAP_CLIENT_ID").filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                cfg.naver_map_client_id = Some(id);
            }
            None => {
                log::warn!("No Naver map client ID found: maps are disabled");
            }
        }
        if let Some(swap) = option_env!("SPORTFINDER_SWAP_FACILITY_COORDINATES").and_then(flag) {
            cfg.swap_facility_coordinates = swap;
        }
        if let Some(enabled) = option_env!("SPORTFINDER_REVIEWS_ENABLED").and_then(flag) {
            cfg.reviews_enabled = enabled;
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL,
            naver_map_client_id: None,
            swap_facility_coordinates: DEFAULT_SWAP_FACILITY_COORDINATES,
            reviews_enabled: DEFAULT_REVIEWS_ENABLED,
        }
    }
}

fn flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => {
            log::warn!("Ignoring invalid flag value: {value}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        assert_eq!(flag("TRUE"), Some(true));
        assert_eq!(flag(" 1 "), Some(true));
        assert_eq!(flag("no"), Some(false));
        assert_eq!(flag("maybe"), None);
    }

    #[test]
    fn defaults() {
        let cfg = Cfg::default();
        assert_eq!(cfg.api_url, "http://localhost:8080");
        assert!(cfg.swap_facility_coordinates);
        assert!(!cfg.reviews_enabled);
    }
}
