//! Ordered table of state definitions.

use super::error::BuildError;
use crate::core::{EventId, StateId};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Event to target-state mapping for a single state.
pub type TransitionTable = BTreeMap<EventId, StateId>;

/// Definition of one state.
///
/// Any fields besides `transitions` are kept in `extra` and never read by
/// the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: TransitionTable,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StateDefinition {
    pub fn new(transitions: TransitionTable) -> Self {
        Self {
            transitions,
            extra: serde_json::Map::new(),
        }
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// State definitions keyed by id, iterated in definition order.
///
/// Deserializing from a JSON object keeps the order of its keys and rejects
/// duplicate keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatesConfig {
    order: Vec<StateId>,
    definitions: HashMap<StateId, StateDefinition>,
}

impl StatesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state at the end of the definition order.
    pub fn insert(
        &mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Result<(), BuildError> {
        let id = id.into();
        if self.definitions.contains_key(&id) {
            return Err(BuildError::DuplicateState(id));
        }
        self.order.push(id.clone());
        self.definitions.insert(id, definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.definitions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// State ids in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &StateId> + '_ {
        self.order.iter()
    }

    /// `(id, definition)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.definitions.get(id).map(|def| (id, def)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for StatesConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, definition) in self.iter() {
            map.serialize_entry(id, definition)?;
        }
        map.end()
    }
}

struct StatesVisitor;

impl<'de> Visitor<'de> for StatesVisitor {
    type Value = StatesConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of state ids to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut states = StatesConfig::new();
        while let Some((id, definition)) = access.next_entry::<StateId, StateDefinition>()? {
            states
                .insert(id, definition)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(states)
    }
}

impl<'de> Deserialize<'de> for StatesConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatesVisitor)
    }
}
