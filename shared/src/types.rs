//! Common types used across the console

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "vi", alias = "vietnamese")]
    Vietnamese,
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vi" | "vietnamese" => Ok(Language::Vietnamese),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// Identifier of the record being edited, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// One entry of a selection field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Label records the way selection lists show them: `name (id)`
    pub fn for_record(id: &str, name: &str) -> Self {
        Self {
            value: id.to_string(),
            label: format!("{} ({})", name, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip_through_serde() {
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
        assert_eq!(lang.code(), "en");

        let lang: Language = serde_json::from_str("\"vietnamese\"").unwrap();
        assert_eq!(lang, Language::Vietnamese);
    }

    #[test]
    fn test_form_mode_id() {
        assert_eq!(FormMode::Create.id(), None);
        assert_eq!(FormMode::Edit("SP01".into()).id(), Some("SP01"));
        assert!(!FormMode::Create.is_edit());
    }

    #[test]
    fn test_select_option_label() {
        let option = SelectOption::for_record("NV01", "Nguyễn Văn A");
        assert_eq!(option.value, "NV01");
        assert_eq!(option.label, "Nguyễn Văn A (NV01)");
    }
}
