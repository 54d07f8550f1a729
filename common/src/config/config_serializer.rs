use serde::{Deserialize, Serialize};

/// Turns a settings document into text and back.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counters {
        wins: u32,
        label: String,
    }

    #[test]
    fn test_yaml_keeps_field_names() {
        let serializer = YamlConfigSerializer::new();
        let text = serializer
            .serialize(&Counters {
                wins: 3,
                label: "dark".to_string(),
            })
            .unwrap();
        assert!(text.contains("wins: 3"));
        assert!(text.contains("label: dark"));
    }

    #[test]
    fn test_deserialize_reports_bad_input() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Counters, String> = serializer.deserialize("wins: lots");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"));
    }
}
