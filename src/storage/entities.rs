use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

/// A single value saved under a key. Mirrors the value kinds a preferences file can hold, so a
/// namespace document stays readable: `{"weekly_goal": 300, "user_name": "Ann"}`.
///
/// Anything else found in a hand-edited file (`300.0`, `null`, lists) is kept as [StoredValue::Raw]
/// and written back unchanged.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum StoredValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Raw(serde_json::Value),
}

impl StoredValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoredValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoredValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl Display for StoredValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoredValue::Bool(v) => write!(f, "{v}"),
            StoredValue::Int(v) => write!(f, "{v}"),
            StoredValue::Text(v) => write!(f, "{v}"),
            StoredValue::Raw(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_owned())
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Int(value)
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        StoredValue::Bool(value)
    }
}

/// Whole namespace as it is saved on disk. Ordered so that rewritten files are stable.
pub type NamespaceDocument = BTreeMap<String, StoredValue>;

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{NamespaceDocument, StoredValue};

    #[test]
    fn test_document_keeps_value_kinds() -> Result<()> {
        let document: NamespaceDocument = serde_json::from_str(
            r#"{"user_name": "Ann", "weekly_goal": 300, "reminder_enabled": true, "monday_minutes": "15"}"#,
        )?;

        assert_eq!(document["user_name"], StoredValue::Text("Ann".into()));
        assert_eq!(document["weekly_goal"], StoredValue::Int(300));
        assert_eq!(document["reminder_enabled"], StoredValue::Bool(true));
        // Minutes are text even when they look like a number.
        assert_eq!(document["monday_minutes"].as_text(), Some("15"));
        assert_eq!(document["monday_minutes"].as_int(), None);
        Ok(())
    }

    #[test]
    fn test_document_keeps_foreign_values() -> Result<()> {
        let content = r#"{"big":18446744073709551615,"dark_mode":true,"nothing":null,"weekly_goal":300.0}"#;
        let document: NamespaceDocument = serde_json::from_str(content)?;

        assert_eq!(document["dark_mode"], StoredValue::Bool(true));
        assert_eq!(document["weekly_goal"].as_int(), None);
        assert_eq!(document["weekly_goal"].to_string(), "300.0");
        assert_eq!(document["nothing"], StoredValue::Raw(serde_json::Value::Null));
        assert_eq!(serde_json::to_string(&document)?, content);
        Ok(())
    }

    #[test]
    fn test_document_serializes_flat() -> Result<()> {
        let mut document = NamespaceDocument::new();
        document.insert("weekly_goal".into(), 120i64.into());
        document.insert("dark_mode".into(), false.into());

        assert_eq!(
            serde_json::to_string(&document)?,
            r#"{"dark_mode":false,"weekly_goal":120}"#
        );
        Ok(())
    }
}
