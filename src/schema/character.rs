use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A character in a tale: who they are, what drives them, and how they
/// stand with the other characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub traits: Vec<String>,
    pub motive: String,
    /// Other character's name → relationship type. Mirrored on both sides
    /// by `add_relationship`.
    #[serde(default)]
    pub relationships: HashMap<String, String>,
    /// Other character's name → attitude. One-sided.
    #[serde(default)]
    pub attitudes: HashMap<String, String>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        traits: Vec<String>,
        motive: impl Into<String>,
        relationships: HashMap<String, String>,
        attitudes: HashMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            traits,
            motive: motive.into(),
            relationships,
            attitudes,
        }
    }

    /// Record `rel_type` between this character and `other`, on both sides.
    ///
    /// An existing relationship with the same character is replaced.
    pub fn add_relationship(&mut self, other: &mut Character, rel_type: impl Into<String>) {
        let rel_type = rel_type.into();
        self.relationships.insert(other.name.clone(), rel_type.clone());
        other.relationships.insert(self.name.clone(), rel_type);
    }

    /// The relationship type recorded toward `name`, if any.
    pub fn relationship_with(&self, name: &str) -> Option<&str> {
        self.relationships.get(name).map(String::as_str)
    }

    pub fn attitude_toward(&self, name: &str) -> Option<&str> {
        self.attitudes.get(name).map(String::as_str)
    }

    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.traits.iter().any(|t| t == trait_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_character(name: &str, traits: &[&str], motive: &str) -> Character {
        Character::new(
            name,
            traits.iter().map(|t| t.to_string()).collect(),
            motive,
            HashMap::new(),
            HashMap::new(),
        )
    }

    #[test]
    fn character_creation() {
        let c = Character::new(
            "Margaret",
            vec!["anxious".to_string(), "wealthy".to_string()],
            "keep the estate",
            HashMap::new(),
            HashMap::from([("James".to_string(), "suspicious".to_string())]),
        );
        assert_eq!(c.name, "Margaret");
        assert_eq!(c.traits, vec!["anxious", "wealthy"]);
        assert_eq!(c.motive, "keep the estate");
        assert!(c.relationships.is_empty());
        assert_eq!(c.attitude_toward("James"), Some("suspicious"));
    }

    #[test]
    fn relationship_mirrors_both_sides() {
        let mut a = make_character("Ada", &["curious"], "learn");
        let mut b = make_character("Bo", &["loyal"], "protect");
        a.add_relationship(&mut b, "friend");

        assert_eq!(
            a.relationships,
            HashMap::from([("Bo".to_string(), "friend".to_string())])
        );
        assert_eq!(
            b.relationships,
            HashMap::from([("Ada".to_string(), "friend".to_string())])
        );
    }

    #[test]
    fn relationship_replaced_on_both_sides() {
        let mut a = make_character("Ada", &[], "learn");
        let mut b = make_character("Bo", &[], "protect");
        a.add_relationship(&mut b, "friend");
        b.add_relationship(&mut a, "rival");

        assert_eq!(a.relationship_with("Bo"), Some("rival"));
        assert_eq!(b.relationship_with("Ada"), Some("rival"));
        assert_eq!(a.relationships.len(), 1);
    }

    #[test]
    fn attitudes_untouched_by_relationships() {
        let mut a = make_character("Ada", &[], "learn");
        let mut b = make_character("Bo", &[], "protect");
        a.attitudes.insert("Bo".to_string(), "wary".to_string());
        a.add_relationship(&mut b, "sibling");

        assert_eq!(a.attitude_toward("Bo"), Some("wary"));
        assert_eq!(b.attitude_toward("Ada"), None);
    }

    #[test]
    fn parse_ron_without_maps() {
        let c: Character =
            ron::from_str(r#"(name: "Ada", traits: ["curious"], motive: "learn")"#).unwrap();
        assert_eq!(c.name, "Ada");
        assert_eq!(c.traits, vec!["curious"]);
        assert!(c.relationships.is_empty());
        assert!(c.attitudes.is_empty());
    }

    #[test]
    fn has_trait_lookup() {
        let c = make_character("Cinderella", &["kind", "patient"], "attend the ball");
        assert!(c.has_trait("kind"));
        assert!(!c.has_trait("cruel"));
    }
}
