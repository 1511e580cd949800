//! Tale graph — typed constructors for characters, settings, and objects
//! over the generic graph registry.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::core::graph::{Graph, GraphError, NodeId};
use crate::schema::character::Character;
use crate::schema::item::{NodeKind, TaleItem, Value};
use crate::schema::object::Object;
use crate::schema::setting::Setting;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaleError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError<String>),
    #[error("'{name}' is a {kind}, not a character")]
    NotACharacter { name: String, kind: NodeKind },
    #[error("'{0}' cannot have a relationship with itself")]
    SelfRelationship(String),
}

/// A graph of the entities in a tale, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TaleGraph {
    graph: Graph<String, TaleItem>,
}

impl TaleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_character(
        &mut self,
        name: &str,
        traits: Vec<String>,
        motive: &str,
        relationships: HashMap<String, String>,
        attitudes: HashMap<String, String>,
    ) -> Result<NodeId, TaleError> {
        let character = Character::new(name, traits, motive, relationships, attitudes);
        self.insert(name, character.into())
    }

    pub fn add_setting(
        &mut self,
        name: &str,
        descriptions: Vec<String>,
    ) -> Result<NodeId, TaleError> {
        self.insert(name, Setting::new(name, descriptions).into())
    }

    pub fn add_object(
        &mut self,
        name: &str,
        descriptions: Vec<String>,
    ) -> Result<NodeId, TaleError> {
        self.insert(name, Object::new(name, descriptions).into())
    }

    /// Insert a node carrying a plain value rather than a tale record.
    pub fn add_node(&mut self, name: &str, value: Value) -> Result<NodeId, TaleError> {
        self.insert(name, value.into())
    }

    /// Link two entities symmetrically. See `Graph::add_connection`.
    pub fn add_connection(&mut self, name1: &str, name2: &str) -> Result<(), TaleError> {
        self.graph.add_connection(name1, name2)?;
        Ok(())
    }

    /// Record `rel_type` between two registered characters, on both sides.
    ///
    /// Only the characters' relationship maps change; adjacency is left
    /// alone.
    pub fn add_relationship(
        &mut self,
        name1: &str,
        name2: &str,
        rel_type: &str,
    ) -> Result<(), TaleError> {
        if name1 == name2 {
            return Err(TaleError::SelfRelationship(name1.to_string()));
        }
        let (first, second) = self.graph.payloads_mut(name1, name2)?;
        let first = Self::expect_character(name1, first)?;
        let second = Self::expect_character(name2, second)?;
        first.add_relationship(second, rel_type);
        debug!(from = name1, to = name2, rel_type, "relationship recorded");
        Ok(())
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.item(name)?.as_character()
    }

    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.item(name)?.as_setting()
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.item(name)?.as_object()
    }

    pub fn item(&self, name: &str) -> Option<&TaleItem> {
        self.graph.get(name).map(|node| node.payload())
    }

    pub fn kind_of(&self, name: &str) -> Option<NodeKind> {
        self.item(name).map(TaleItem::kind)
    }

    /// The underlying registry, for adjacency queries.
    pub fn graph(&self) -> &Graph<String, TaleItem> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    fn insert(&mut self, name: &str, item: TaleItem) -> Result<NodeId, TaleError> {
        let kind = item.kind();
        let id = self.graph.add_node(name.to_string(), item)?;
        debug!(name, %kind, "tale entity added");
        Ok(id)
    }

    fn expect_character<'a>(
        name: &str,
        item: &'a mut TaleItem,
    ) -> Result<&'a mut Character, TaleError> {
        let kind = item.kind();
        item.as_character_mut().ok_or_else(|| TaleError::NotACharacter {
            name: name.to_string(),
            kind,
        })
    }
}
