use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    /// English display name, also the name spoken in announcements.
    pub name: &'static str,
    /// Name in the language's own script, shown in the picker.
    pub native_name: &'static str,
    pub translation: &'static str,
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
                name: "English",
                native_name: "English",
                translation: include_str!("../translations/en.json"),
            },
        ),
        (
            "hi",
            LanguageInfo {
                code: "hi",
                name: "Hindi",
                native_name: "हिन्दी",
                translation: include_str!("../translations/hi.json"),
            },
        ),
        (
            "mr",
            LanguageInfo {
                code: "mr",
                name: "Marathi",
                native_name: "मराठी",
                translation: include_str!("../translations/mr.json"),
            },
        ),
        (
            "gu",
            LanguageInfo {
                code: "gu",
                name: "Gujarati",
                native_name: "ગુજરાતી",
                translation: include_str!("../translations/gu.json"),
            },
        ),
    ])
}

/// Build the spoken announcement for a language change. Unrecognized codes
/// are announced as-is.
pub fn change_announcement(code: &str) -> String {
    let name = get_language_info(code)
        .map_or_else(|| code.to_string(), |info| info.name.to_string());
    format!("Language changed to {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keys every translation table must provide.
    const REQUIRED_KEYS: &[&str] = &[
        "app.title",
        "profile.title",
        "profile.edit",
        "profile.years",
        "profile.address",
        "profile.logout",
        "health.title",
        "health.none_recorded",
        "health.current_status",
        "health.certificates",
        "health.view_certificate",
        "health.conditions.low_vision",
        "health.conditions.blindness",
        "health.conditions.hearing_impairment",
        "health.conditions.diabetes",
        "health.conditions.hypertension",
        "contacts.title",
        "language.title",
        "login.title",
        "login.name",
        "login.email",
        "login.submit",
        "edit.title",
        "edit.name",
        "edit.email",
        "edit.age",
        "edit.gender",
        "edit.gender_unspecified",
        "edit.address",
        "edit.health_condition",
        "edit.medical_status",
        "edit.certificate",
        "edit.contact_name",
        "edit.contact_number",
        "edit.add_contact",
        "edit.remove",
        "edit.save",
        "edit.cancel",
        "gender.female",
        "gender.male",
        "gender.other",
        "error.title",
        "error.body",
    ];

    fn lookup<'a>(table: &'a serde_json::Value, dotted: &str) -> Option<&'a serde_json::Value> {
        dotted
            .split('.')
            .try_fold(table, |value, segment| value.get(segment))
    }

    #[test]
    fn test_four_supported_languages() {
        let languages = supported_languages();
        assert_eq!(languages.len(), 4);
        for code in ["en", "hi", "mr", "gu"] {
            assert!(languages.contains_key(code), "missing language {code}");
        }
    }

    #[test]
    fn test_language_lookup() {
        let hindi = get_language_info("hi").expect("hi should be registered");
        assert_eq!(hindi.name, "Hindi");
        assert_eq!(hindi.native_name, "हिन्दी");
        assert!(get_language_info("fr").is_none());
    }

    #[test]
    fn test_change_announcement_known_code() {
        let announcement = change_announcement("hi");
        assert!(announcement.contains("Hindi"), "got: {announcement}");
        assert_eq!(change_announcement("gu"), "Language changed to Gujarati");
    }

    #[test]
    fn test_change_announcement_unknown_code() {
        let announcement = change_announcement("xx");
        assert!(announcement.contains("xx"), "got: {announcement}");
        assert!(!announcement.contains("English"));
    }

    #[test]
    fn test_translations_are_valid_json() {
        for (code, info) in supported_languages() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation)
                .unwrap_or_else(|err| panic!("{code}.json is not valid JSON: {err}"));
            assert!(parsed.is_object(), "{code}.json should be an object");
        }
    }

    #[test]
    fn test_translations_cover_required_keys() {
        for (code, info) in supported_languages() {
            let table: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            for key in REQUIRED_KEYS {
                let value = lookup(&table, key)
                    .unwrap_or_else(|| panic!("{code}.json is missing {key}"));
                let text = value
                    .as_str()
                    .unwrap_or_else(|| panic!("{code}.json: {key} is not a string"));
                assert!(!text.is_empty(), "{code}.json: {key} is empty");
            }
        }
    }
}
