//! Frontend configuration module
//!
//! Compile-time overridable settings for language and speech output.

/// Frontend configuration for localization and speech defaults.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Locale code used before the user picks a language.
    pub default_language: String,

    /// BCP 47 tag applied to speech utterances.
    pub speech_lang: String,

    /// Speech rate; 1.0 is the browser default pace.
    pub speech_rate: f32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            default_language: option_env!("VAANI_DEFAULT_LANGUAGE")
                .unwrap_or("en")
                .to_string(),
            speech_lang: option_env!("VAANI_SPEECH_LANG")
                .unwrap_or("en-IN")
                .to_string(),
            speech_rate: option_env!("VAANI_SPEECH_RATE")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(1.0),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the default locale code
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Get the BCP 47 tag for speech utterances
    pub fn speech_lang(&self) -> &str {
        &self.speech_lang
    }

    /// Get the configured speech rate
    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FrontendConfig::new();
        assert!(!config.default_language().is_empty());
        assert!(!config.speech_lang().is_empty());
        assert!(config.speech_rate() > 0.0);
    }

    #[test]
    fn test_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.default_language(), config2.default_language());
        assert_eq!(config1.speech_lang(), config2.speech_lang());
    }
}
