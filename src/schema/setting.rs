use serde::{Deserialize, Serialize};

/// A place where the tale unfolds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub descriptions: Vec<String>,
}

impl Setting {
    pub fn new(name: impl Into<String>, descriptions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            descriptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_creation() {
        let s = Setting::new("forest", vec!["magical".to_string(), "vast".to_string()]);
        assert_eq!(s.name, "forest");
        assert_eq!(s.descriptions, vec!["magical", "vast"]);
    }
}
