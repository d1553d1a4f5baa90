//! Container variants
//!
//! The five container shapes the search/removal operations understand.
//! Each variant wraps the collection that carries its ordering rules:
//! maps are unordered, stacks enumerate top to bottom, queues front to
//! back, sequences and arrays by index.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Variant tag of a [`Container`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    AssociativeMap,
    Stack,
    Queue,
    MutableSequence,
    FixedArray,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::AssociativeMap => "associative map",
            ContainerKind::Stack => "stack",
            ContainerKind::Queue => "queue",
            ContainerKind::MutableSequence => "mutable sequence",
            ContainerKind::FixedArray => "fixed array",
        };
        f.write_str(name)
    }
}

/// A caller-owned collection of one of the supported shapes.
///
/// Encoded in JSON as `{"kind": "<kind>", "items": ...}` where `items` is
/// an object for maps and an array otherwise. Stack items are listed in
/// push order, bottom first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, V: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
))]
pub enum Container<K, V> {
    AssociativeMap(HashMap<K, V>),
    Stack(Stack<V>),
    Queue(VecDeque<V>),
    MutableSequence(Vec<V>),
    FixedArray(Box<[V]>),
}

impl<K, V> Container<K, V> {
    /// The variant tag of this container
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::AssociativeMap(_) => ContainerKind::AssociativeMap,
            Container::Stack(_) => ContainerKind::Stack,
            Container::Queue(_) => ContainerKind::Queue,
            Container::MutableSequence(_) => ContainerKind::MutableSequence,
            Container::FixedArray(_) => ContainerKind::FixedArray,
        }
    }

    /// Number of entries (map pairs or elements)
    pub fn len(&self) -> usize {
        match self {
            Container::AssociativeMap(map) => map.len(),
            Container::Stack(stack) => stack.len(),
            Container::Queue(queue) => queue.len(),
            Container::MutableSequence(seq) => seq.len(),
            Container::FixedArray(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Container<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Container::AssociativeMap(a), Container::AssociativeMap(b)) => a == b,
            (Container::Stack(a), Container::Stack(b)) => a == b,
            (Container::Queue(a), Container::Queue(b)) => a == b,
            (Container::MutableSequence(a), Container::MutableSequence(b)) => a == b,
            (Container::FixedArray(a), Container::FixedArray(b)) => a == b,
            _ => false,
        }
    }
}

/// LIFO stack.
///
/// Enumeration yields elements in pop order, most recently pushed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<V> {
    /// Bottom of the stack at index 0
    items: Vec<V>,
}

impl<V> Stack<V> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: V) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<V> {
        self.items.pop()
    }

    /// Top of the stack without removing it
    pub fn peek(&self) -> Option<&V> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate top to bottom (pop order)
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.items.iter().rev()
    }
}

impl<V> Default for Stack<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a stack from a bottom-first vector.
impl<V> From<Vec<V>> for Stack<V> {
    fn from(items: Vec<V>) -> Self {
        Self { items }
    }
}

/// Pushes each item in turn, so the last item ends up on top.
impl<V> FromIterator<V> for Stack<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
