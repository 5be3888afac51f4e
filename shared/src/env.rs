use once_cell::sync::Lazy;
use regex::Regex;

/// Runtime context the page is embedded in, derived from the user agent.
///
/// The containers stamp their own markers into the UA string: the game
/// container appends `amusementpark/<version>`, the in-app webview appends
/// `Fanbook/<version>` and the mini-program container appends `FBMP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    AmusementPark,
    FanbookHtml,
    Miniprogram,
    Other,
}

impl Environment {
    /// Any of the Fanbook-owned containers, as opposed to a plain browser.
    pub fn in_fanbook(self) -> bool {
        self != Environment::Other
    }
}

/// Classifies a user agent string. First marker wins: the game container
/// also carries the `fanbook/` marker, so it must be checked first.
pub fn classify(user_agent: &str) -> Environment {
    let ua = user_agent.to_lowercase();
    if ua.contains("amusementpark") {
        Environment::AmusementPark
    } else if ua.contains("fanbook/") {
        Environment::FanbookHtml
    } else if ua.contains("fbmp") {
        Environment::Miniprogram
    } else {
        Environment::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Apple,
    Android,
    Other,
}

impl DeviceType {
    /// Value for the `AppType` request header.
    pub fn header_value(self) -> &'static str {
        match self {
            DeviceType::Apple => "ios",
            DeviceType::Android => "android",
            DeviceType::Other => "other",
        }
    }

    /// Numeric platform tag the draw endpoint expects (iOS=1, Android=2).
    /// Desktop browsers are reported as Android.
    pub fn platform_code(self) -> u8 {
        match self {
            DeviceType::Apple => 1,
            _ => 2,
        }
    }
}

pub fn device_type(user_agent: &str) -> DeviceType {
    let ua = user_agent.to_lowercase();
    if ["ipad", "iphone", "ipod", "mac"].iter().any(|m| ua.contains(m)) {
        DeviceType::Apple
    } else if ua.contains("android") {
        DeviceType::Android
    } else {
        DeviceType::Other
    }
}

static APP_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(fanbook|amusementpark)/(\d+(?:\.\d+)*)").expect("valid regex"));

/// Extracts the embedded app version from a (lower-cased or mixed-case)
/// user agent, e.g. `"... Fanbook/2.3.0 ..."` yields `"2.3.0"`.
pub fn extract_app_version(user_agent: &str) -> Option<String> {
    let ua = user_agent.to_lowercase();
    APP_VERSION_RE
        .captures(&ua)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
}

/// Segment-wise numeric version comparison; missing segments count as 0,
/// so `2.10.0 > 2.9.9` and `2.2 == 2.2.0`.
pub fn is_version_at_least(version: &str, min: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|s| s.parse::<u64>().unwrap_or(0))
            .collect()
    };
    let a = parse(version);
    let b = parse(min);
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x > y;
        }
    }
    true
}

/// Whether the embedding app is at least `min` version. Fails closed when
/// no version is present in the user agent.
pub fn check_app_version(user_agent: &str, min: &str) -> bool {
    match extract_app_version(user_agent) {
        Some(v) => is_version_at_least(&v, min),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARK_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0) Fanbook/2.3.1 AmusementPark/2.3.1";
    const HTML_UA: &str = "Mozilla/5.0 (Linux; Android 13) Fanbook/2.2.5";
    const MP_UA: &str = "Mozilla/5.0 (Linux; Android 13) FBMP/2.4.0";
    const PLAIN_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    #[test]
    fn classify_priority_order() {
        // The game container marker wins even though fanbook/ co-occurs.
        assert_eq!(classify(PARK_UA), Environment::AmusementPark);
        assert_eq!(classify(HTML_UA), Environment::FanbookHtml);
        assert_eq!(classify(MP_UA), Environment::Miniprogram);
        assert_eq!(classify(PLAIN_UA), Environment::Other);
    }

    #[test]
    fn in_fanbook_covers_all_containers() {
        assert!(classify(PARK_UA).in_fanbook());
        assert!(classify(HTML_UA).in_fanbook());
        assert!(classify(MP_UA).in_fanbook());
        assert!(!classify(PLAIN_UA).in_fanbook());
    }

    #[test]
    fn device_type_matching() {
        assert_eq!(device_type(PARK_UA), DeviceType::Apple);
        assert_eq!(device_type(HTML_UA), DeviceType::Android);
        assert_eq!(device_type(PLAIN_UA), DeviceType::Other);
        assert_eq!(device_type("Mozilla/5.0 (Macintosh; Intel Mac OS X)"), DeviceType::Apple);
    }

    #[test]
    fn version_extraction() {
        assert_eq!(extract_app_version(HTML_UA).as_deref(), Some("2.2.5"));
        assert_eq!(extract_app_version(PARK_UA).as_deref(), Some("2.3.1"));
        assert_eq!(extract_app_version(PLAIN_UA), None);
    }

    #[test]
    fn version_compare_is_numeric_not_lexical() {
        assert!(is_version_at_least("2.10.0", "2.9.9"));
        assert!(is_version_at_least("2.2.5", "2.2.5"));
        assert!(!is_version_at_least("2.2.4", "2.2.5"));
        assert!(is_version_at_least("3.0", "2.99.99"));
        assert!(is_version_at_least("2.2", "2.2.0"));
    }

    #[test]
    fn version_check_fails_closed_without_version() {
        assert!(!check_app_version(PLAIN_UA, "2.2.5"));
        assert!(check_app_version(HTML_UA, "2.2.5"));
        assert!(!check_app_version(HTML_UA, "2.4.1"));
    }
}
