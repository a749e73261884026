use std::collections::HashMap;

/// Language used until the visitor picks another one.
pub const DEFAULT_LANGUAGE: &str = "pt";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "pt",
            LanguageInfo {
                code: "pt",
                flag: "🇧🇷",
                translation: include_str!("../translations/pt.json"),
                native_name: "Português",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn leaf_keys(value: &Value, prefix: &str, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    leaf_keys(child, &path, keys);
                }
            }
            _ => keys.push(prefix.to_string()),
        }
    }

    fn keys_of(code: &str) -> Vec<String> {
        let info = get_language_info(code).unwrap();
        let json: Value = serde_json::from_str(info.translation).unwrap();
        let mut keys = Vec::new();
        leaf_keys(&json, "", &mut keys);
        keys.sort();
        keys
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(get_language_info(DEFAULT_LANGUAGE).is_some());
        assert!(get_language_info("xx").is_none());
    }

    #[test]
    fn test_translations_share_keys() {
        let english = keys_of("en");
        assert!(!english.is_empty());
        assert_eq!(english, keys_of("pt"));
    }
}
