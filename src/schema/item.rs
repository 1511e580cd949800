use serde::{Deserialize, Serialize};
use std::fmt;

use super::character::Character;
use super::object::Object;
use super::setting::Setting;

/// A dynamic value stored as the payload of a generic node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

/// Which kind of entity a tale node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Character,
    Setting,
    Object,
    Generic,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Setting => "setting",
            Self::Object => "object",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a node in a tale graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaleItem {
    Character(Character),
    Setting(Setting),
    Object(Object),
    Generic(Value),
}

impl TaleItem {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Character(_) => NodeKind::Character,
            Self::Setting(_) => NodeKind::Setting,
            Self::Object(_) => NodeKind::Object,
            Self::Generic(_) => NodeKind::Generic,
        }
    }

    /// The record's own name. Generic values carry none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Character(c) => Some(&c.name),
            Self::Setting(s) => Some(&s.name),
            Self::Object(o) => Some(&o.name),
            Self::Generic(_) => None,
        }
    }

    pub fn as_character(&self) -> Option<&Character> {
        match self {
            Self::Character(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut Character> {
        match self {
            Self::Character(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_setting(&self) -> Option<&Setting> {
        match self {
            Self::Setting(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<Character> for TaleItem {
    fn from(c: Character) -> Self {
        Self::Character(c)
    }
}

impl From<Setting> for TaleItem {
    fn from(s: Setting) -> Self {
        Self::Setting(s)
    }
}

impl From<Object> for TaleItem {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Value> for TaleItem {
    fn from(v: Value) -> Self {
        Self::Generic(v)
    }
}
