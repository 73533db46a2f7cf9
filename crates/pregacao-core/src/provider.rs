use serde::{Deserialize, Serialize};

/// Which generator backs a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Template,
    OpenAI,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Template => "template",
            Strategy::OpenAI => "openai",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "template" | "demo" => Some(Strategy::Template),
            "openai" => Some(Strategy::OpenAI),
            _ => None,
        }
    }

    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Template, Strategy::OpenAI]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Template => "Template (Demo)",
            Strategy::OpenAI => "ChatGPT (OpenAI)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(Strategy::from_str("OpenAI"), Some(Strategy::OpenAI));
        assert_eq!(Strategy::from_str("demo"), Some(Strategy::Template));
        assert_eq!(Strategy::from_str("claude"), None);
    }

    #[test]
    fn test_strategy_serde_matches_as_str() {
        for strategy in Strategy::all() {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
    }
}
