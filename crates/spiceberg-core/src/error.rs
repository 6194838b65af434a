use thiserror::Error;

pub type Result<T> = std::result::Result<T, LandingError>;

/// Failures that can stop the landing page from booting.
///
/// Runtime interaction never fails: unknown themes and sub-threshold
/// gestures are silently ignored. Only construction paths return these.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("missing required UI anchor: {selector}")]
    MissingAnchor { selector: String },

    #[error("carousel has no dish cards")]
    EmptyCarousel,

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("config JSON error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl LandingError {
    #[must_use]
    pub fn missing_anchor(selector: impl Into<String>) -> Self {
        Self::MissingAnchor {
            selector: selector.into(),
        }
    }

    #[must_use]
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_anchor_names_selector() {
        let err = LandingError::missing_anchor("#dishTrack");
        assert_eq!(err.to_string(), "missing required UI anchor: #dishTrack");
    }

    #[test]
    fn invalid_config_names_field() {
        let err = LandingError::invalid_config("card_width", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid config field `card_width`: must be positive"
        );
    }

    #[test]
    fn config_parse_wraps_serde_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LandingError = parse.into();
        assert!(err.to_string().starts_with("config JSON error:"));
    }
}
