//! Configuration data structures

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::rules::RulesList;

/// Rule file contents
#[derive(Deserialize, Debug, Clone)]
pub struct MirrorConfig {
    /// Rules applied in order, replacing the built-in ones
    pub rules: RulesList,
}

impl MirrorConfig {
    /// Validates the configuration
    ///
    /// Checks that at least one rule exists and that every rule has a title,
    /// a root and an extension starting with a dot.
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(anyhow!(
                "No rules specified in configuration. At least one rule is required."
            ));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.title.trim().is_empty() {
                return Err(anyhow!(
                    "Rule at index {} has an empty title. Each rule must have a title.",
                    index
                ));
            }

            if rule.root.as_os_str().is_empty() {
                return Err(anyhow!("Rule '{}' has an empty root directory.", rule.title));
            }

            if !rule.extension.starts_with('.') || rule.extension.len() < 2 {
                return Err(anyhow!(
                    "Rule '{}' has extension '{}'. Extensions must start with '.' and name a suffix.",
                    rule.title,
                    rule.extension
                ));
            }

            if rule.target_extension().is_empty() {
                return Err(anyhow!(
                    "Rule '{}' has an empty target extension.",
                    rule.title
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TransformRule;

    #[test]
    fn test_validate_accepts_builtin_rules() {
        let config = MirrorConfig {
            rules: vec![TransformRule::forward(), TransformRule::reverse()],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_rules() {
        let config = MirrorConfig { rules: Vec::new() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("At least one rule"));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut rule = TransformRule::forward();
        rule.title = "  ".to_string();
        let config = MirrorConfig { rules: vec![rule] };
        assert!(config.validate().unwrap_err().to_string().contains("empty title"));

        let mut rule = TransformRule::forward();
        rule.extension = "S".to_string();
        let config = MirrorConfig { rules: vec![rule] };
        assert!(config.validate().unwrap_err().to_string().contains("must start with"));

        let rule = TransformRule::forward().with_root("");
        let config = MirrorConfig { rules: vec![rule] };
        assert!(config.validate().unwrap_err().to_string().contains("empty root"));

        let mut rule = TransformRule::reverse();
        rule.target_extension = Some(String::new());
        let config = MirrorConfig { rules: vec![rule] };
        assert!(config.validate().unwrap_err().to_string().contains("empty target"));
    }
}
