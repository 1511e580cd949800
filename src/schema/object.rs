use serde::{Deserialize, Serialize};

/// A thing that appears in the tale: a glass slipper, a pumpkin, a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub descriptions: Vec<String>,
}

impl Object {
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
    fn object_creation() {
        let o = Object::new("glass slipper", vec!["fragile".to_string()]);
        assert_eq!(o.name, "glass slipper");
        assert_eq!(o.descriptions.len(), 1);
    }

    #[test]
    fn object_without_descriptions() {
        let o = Object::new("pumpkin", Vec::new());
        assert!(o.descriptions.is_empty());
    }
}
