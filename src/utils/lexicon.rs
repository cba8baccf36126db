use super::{parse_plaintext, ParsedPattern};
use crate::ImportError;
use serde::Deserialize;

/// One entry of the Life Lexicon catalog as served in JSON.
///
/// Only `pattern` is needed to build a stamp; the rest is descriptive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LexiconEntry {
    pub code: String,
    pub name: String,
    pub meta: String,
    pub date: String,
    pub description: String,
    /// Plaintext picture, rows separated by `\n`.
    pub pattern: String,
}

impl LexiconEntry {
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_pattern(&self) -> Result<ParsedPattern, ImportError> {
        parse_plaintext(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::LexiconEntry;
    use crate::ImportError;

    #[test]
    fn test_parse_entry() {
        let json = r#"{
            "Code": "glider",
            "Name": "glider",
            "Meta": "c/4 diagonal",
            "Date": "1970",
            "Description": "The smallest, most common spaceship.",
            "Pattern": ".O.\n..O\nOOO\n"
        }"#;
        let entry = LexiconEntry::parse(json).unwrap();
        assert_eq!(entry.name, "glider");
        let pattern = entry.to_pattern().unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.population(), 5);
    }

    #[test]
    fn test_missing_fields_default() {
        let entry = LexiconEntry::parse(r#"{"Pattern": "OO\nOO"}"#).unwrap();
        assert!(entry.code.is_empty());
        assert_eq!(entry.to_pattern().unwrap().population(), 4);
    }

    #[test]
    fn test_empty_pattern() {
        let entry = LexiconEntry::parse(r#"{"Name": "nothing"}"#).unwrap();
        assert!(matches!(entry.to_pattern(), Err(ImportError::Empty)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LexiconEntry::parse("{\"Pattern\": "),
            Err(ImportError::Json(_))
        ));
    }
}
