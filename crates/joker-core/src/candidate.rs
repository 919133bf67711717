use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Anything that can be compared against user input.
pub trait ComparisonText {
    fn comparison_text(&self) -> &str;
}

impl ComparisonText for str {
    fn comparison_text(&self) -> &str {
        self
    }
}

impl ComparisonText for String {
    fn comparison_text(&self) -> &str {
        self
    }
}

impl<T: ComparisonText + ?Sized> ComparisonText for &T {
    fn comparison_text(&self) -> &str {
        (**self).comparison_text()
    }
}

/// A known command, either bare text or a record carrying extra attributes.
///
/// Deserialises from either a plain string or a table with a `text` key; any
/// other keys of the table land in `payload` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    PlainText(String),
    Labeled {
        text: String,
        #[serde(flatten)]
        payload: IndexMap<String, serde_json::Value>,
    },
}

impl Candidate {
    pub fn labeled(text: impl Into<String>, payload: IndexMap<String, serde_json::Value>) -> Self {
        Candidate::Labeled {
            text: text.into(),
            payload,
        }
    }

    /// Opaque attributes of a labeled candidate, if any.
    pub fn payload(&self) -> Option<&IndexMap<String, serde_json::Value>> {
        match self {
            Candidate::PlainText(_) => None,
            Candidate::Labeled { payload, .. } => Some(payload),
        }
    }
}

impl ComparisonText for Candidate {
    fn comparison_text(&self) -> &str {
        match self {
            Candidate::PlainText(text) | Candidate::Labeled { text, .. } => text,
        }
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Candidate::PlainText(text.to_string())
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Candidate::PlainText(text)
    }
}
