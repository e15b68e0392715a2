use serde::{Deserialize, Serialize};

/// Configuration of the issue-tracker module (`issues` section).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IssuesConfig {
    /// Path prefix the project-scoped resource is mounted under.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
        }
    }
}

fn default_route_prefix() -> String {
    "/api/issues".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_prefix() {
        assert_eq!(IssuesConfig::default().route_prefix, "/api/issues");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let cfg: IssuesConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, IssuesConfig::default());
    }
}
