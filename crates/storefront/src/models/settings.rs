//! Site-wide settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Singleton site configuration.
///
/// Missing fields take their defaults when read. Entry values are free-form
/// JSON; clients agree on their meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Named theme colors (e.g. `primary`, `background`).
    pub theme_colors: Map<String, Value>,
    /// Payment method flags (e.g. `upi`, `card`, `cod`).
    pub payment_methods: Map<String, Value>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let theme_colors = [("primary", "#FACC15"), ("background", "#09090b")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        let payment_methods = [("upi", true), ("card", true), ("cod", true)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();

        Self {
            theme_colors,
            payment_methods,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let value = serde_json::to_value(SiteSettings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "theme_colors": {"primary": "#FACC15", "background": "#09090b"},
                "payment_methods": {"upi": true, "card": true, "cod": true},
            })
        );
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: SiteSettings =
            serde_json::from_value(json!({"payment_methods": {"cod": false}})).unwrap();
        assert_eq!(settings.theme_colors["primary"], "#FACC15");
        assert_eq!(settings.payment_methods.len(), 1);
    }

    #[test]
    fn test_entries_accept_any_json() {
        let raw = json!({
            "theme_colors": {"primary": {"light": "#fff", "dark": "#000"}},
            "payment_methods": {"card": {"enabled": true, "fee": 2.5}, "cod": "later"},
        });
        let settings: SiteSettings = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(settings).unwrap(), raw);
    }
}
