use super::Record;

/// Text encoding of a [`Record`]. Errors name the record's key.
pub trait RecordSerializer<TRecord: Record> {
    fn serialize(&self, record: &TRecord) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TRecord, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

impl YamlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TRecord: Record> RecordSerializer<TRecord> for YamlSerializer {
    fn serialize(&self, record: &TRecord) -> Result<String, String> {
        serde_yaml_ng::to_string(record)
            .map_err(|e| format!("Failed to write record '{}' as YAML: {}", TRecord::KEY, e))
    }

    fn deserialize(&self, content: &str) -> Result<TRecord, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Record '{}' is not valid YAML: {}", TRecord::KEY, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Validate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Volume {
        level: u8,
    }

    impl Validate for Volume {
        fn validate(&self) -> Result<(), String> {
            Ok(())
        }
    }

    impl Record for Volume {
        const KEY: &'static str = "volume";
    }

    #[test]
    fn test_yaml_output_is_plain_mapping() {
        let serializer = YamlSerializer::new();

        let text = serializer.serialize(&Volume { level: 3 }).unwrap();

        assert_eq!(text.trim(), "level: 3");
    }

    #[test]
    fn test_parse_error_names_the_record() {
        let serializer = YamlSerializer::new();

        let result: Result<Volume, String> = serializer.deserialize("level: loud\n");

        let error = result.unwrap_err();
        assert!(error.contains("'volume'"), "{}", error);
    }
}
