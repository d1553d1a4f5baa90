//! Search and removal across container variants
//!
//! Ownership follows the operation:
//! - [`remove_key_pair`] mutates the caller's map and hands the same
//!   handle back.
//! - [`remove_value`] leaves the input alone and returns a rebuilt
//!   container of the same variant.
//! - [`remove_array_value`] returns a new array.
//!
//! Removal is first-match for mutable sequences but all-match for stacks,
//! queues and arrays.

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use tracing::warn;

use super::types::{Container, ContainerKind, Stack};
use crate::error::{CofferError, Result};

/// Check whether `value` is held by the container.
///
/// Maps are searched by value, never by key. Fixed arrays are not
/// searchable through this entry point.
pub fn contains<K, V: PartialEq>(container: &Container<K, V>, value: &V) -> Result<bool> {
    match container {
        Container::AssociativeMap(map) => Ok(map.values().any(|v| v == value)),
        Container::Stack(stack) => Ok(stack.iter().any(|v| v == value)),
        Container::Queue(queue) => Ok(queue.iter().any(|v| v == value)),
        Container::MutableSequence(seq) => Ok(seq.iter().any(|v| v == value)),
        Container::FixedArray(_) => Err(unsupported("contains", container.kind())),
    }
}

/// Remove the entry stored under `key`, mutating the map in place.
///
/// Returns the same map handle on success.
pub fn remove_key_pair<'a, K, V, Q>(
    map: Option<&'a mut HashMap<K, V>>,
    key: &Q,
) -> Result<&'a mut HashMap<K, V>>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
{
    let Some(map) = map else {
        warn!(operation = "remove_key_pair", "null value detected");
        return Err(CofferError::NullInput);
    };

    if map.remove(key).is_none() {
        warn!(operation = "remove_key_pair", "key not found");
        return Err(CofferError::KeyNotFound);
    }

    Ok(map)
}

/// Return a copy of the container with `value` removed.
///
/// Mutable sequences lose only their first match. Stacks and queues lose
/// every match and keep the relative order of the survivors.
pub fn remove_value<K, V>(container: &Container<K, V>, value: &V) -> Result<Container<K, V>>
where
    V: PartialEq + Clone,
{
    match container {
        Container::MutableSequence(seq) => {
            let mut rebuilt = seq.clone();
            if let Some(pos) = rebuilt.iter().position(|v| v == value) {
                rebuilt.remove(pos);
            }
            Ok(Container::MutableSequence(rebuilt))
        }
        Container::Stack(stack) => Ok(Container::Stack(rebuild_stack(stack, value))),
        Container::Queue(queue) => Ok(Container::Queue(rebuild_queue(queue, value))),
        Container::AssociativeMap(_) | Container::FixedArray(_) => {
            Err(unsupported("remove_value", container.kind()))
        }
    }
}

/// New array holding every element not equal to `value`.
pub fn remove_array_value<V: PartialEq + Clone>(array: &[V], value: &V) -> Box<[V]> {
    array.iter().filter(|v| *v != value).cloned().collect()
}

// Two push passes, each fed top to bottom, reverse twice and so restore the
// original pop order.
fn rebuild_stack<V: PartialEq + Clone>(stack: &Stack<V>, value: &V) -> Stack<V> {
    let mut intermediate = Stack::new();
    for item in stack.iter().filter(|v| *v != value) {
        intermediate.push(item.clone());
    }

    let mut rebuilt = Stack::new();
    for item in intermediate.iter() {
        rebuilt.push(item.clone());
    }
    rebuilt
}

fn rebuild_queue<V: PartialEq + Clone>(queue: &VecDeque<V>, value: &V) -> VecDeque<V> {
    queue.iter().filter(|v| *v != value).cloned().collect()
}

fn unsupported(operation: &'static str, kind: ContainerKind) -> CofferError {
    warn!(operation, %kind, "unsupported container variant");
    CofferError::UnsupportedVariant { operation, kind }
}

impl<K, V> Container<K, V> {
    /// See [`contains`]
    pub fn contains(&self, value: &V) -> Result<bool>
    where
        V: PartialEq,
    {
        contains(self, value)
    }

    /// See [`remove_value`]
    pub fn remove_value(&self, value: &V) -> Result<Self>
    where
        V: PartialEq + Clone,
    {
        remove_value(self, value)
    }

    /// Remove a key from an associative map in place; other variants are
    /// rejected untouched.
    pub fn remove_key_pair<Q>(&mut self, key: &Q) -> Result<&mut Self>
    where
        K: Borrow<Q> + Eq + Hash,
        Q: Eq + Hash + ?Sized,
    {
        match self {
            Container::AssociativeMap(map) => {
                remove_key_pair(Some(map), key)?;
            }
            other => return Err(unsupported("remove_key_pair", other.kind())),
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_order(container: Container<u8, i32>) -> Vec<i32> {
        match container {
            Container::Stack(mut stack) => std::iter::from_fn(|| stack.pop()).collect(),
            other => panic!("expected a stack, got {}", other.kind()),
        }
    }

    fn sample_map() -> HashMap<i32, String> {
        HashMap::from([(1, "A".to_string()), (2, "B".to_string())])
    }

    #[test]
    fn test_contains_map_searches_values() {
        let container: Container<i32, String> = Container::AssociativeMap(sample_map());
        assert!(container.contains(&"B".to_string()).unwrap());
        assert!(!container.contains(&"C".to_string()).unwrap());
    }

    #[test]
    fn test_contains_map_ignores_keys() {
        let map: HashMap<i32, i32> = HashMap::from([(1, 10), (2, 20)]);
        let container: Container<i32, i32> = Container::AssociativeMap(map);
        assert!(!contains(&container, &1).unwrap());
        assert!(contains(&container, &20).unwrap());
    }

    #[test]
    fn test_contains_ordered_variants() {
        let stack: Container<u8, i32> = Container::Stack([1, 2, 3].into_iter().collect());
        let queue: Container<u8, i32> = Container::Queue(VecDeque::from(vec![1, 2, 3]));
        let seq: Container<u8, i32> = Container::MutableSequence(vec![1, 2, 3]);
        for container in [&stack, &queue, &seq] {
            assert!(container.contains(&2).unwrap());
            assert!(!container.contains(&9).unwrap());
        }
    }

    #[test]
    fn test_contains_fixed_array_unsupported() {
        let array: Container<u8, i32> = Container::FixedArray(vec![1, 2].into_boxed_slice());
        let err = array.contains(&1).unwrap_err();
        assert!(matches!(
            err,
            CofferError::UnsupportedVariant {
                kind: ContainerKind::FixedArray,
                ..
            }
        ));
    }

    #[test]
    fn test_remove_key_pair_present() {
        let mut map = sample_map();
        let before = map.len();
        let handle = remove_key_pair(Some(&mut map), &1).unwrap();
        assert_eq!(handle.len(), before - 1);
        assert!(!handle.contains_key(&1));
        assert_eq!(map.get(&2).map(String::as_str), Some("B"));
    }

    #[test]
    fn test_remove_key_pair_absent_leaves_map() {
        let mut map = sample_map();
        let err = remove_key_pair(Some(&mut map), &7).unwrap_err();
        assert!(matches!(err, CofferError::KeyNotFound));
        assert_eq!(map, sample_map());
    }

    #[test]
    fn test_remove_key_pair_null() {
        let err = remove_key_pair::<i32, String, i32>(None, &1).unwrap_err();
        assert!(matches!(err, CofferError::NullInput));
    }

    #[test]
    fn test_remove_key_pair_borrowed_key() {
        let mut map: HashMap<String, i32> = HashMap::from([("hp".to_string(), 10)]);
        remove_key_pair(Some(&mut map), "hp").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_container_remove_key_pair() {
        let mut container: Container<i32, String> = Container::AssociativeMap(sample_map());
        assert_eq!(container.remove_key_pair(&2).unwrap().len(), 1);

        let mut seq: Container<i32, String> = Container::MutableSequence(vec!["A".to_string()]);
        assert!(matches!(
            seq.remove_key_pair(&0),
            Err(CofferError::UnsupportedVariant { .. })
        ));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_remove_value_stack_keeps_pop_order() {
        // pushed 1,2,3,2 -> pop order 2,3,2,1
        let stack: Container<u8, i32> = Container::Stack([1, 2, 3, 2].into_iter().collect());
        let rebuilt = stack.remove_value(&2).unwrap();
        assert_eq!(pop_order(rebuilt), vec![3, 1]);
        assert_eq!(pop_order(stack), vec![2, 3, 2, 1]);
    }

    #[test]
    fn test_remove_value_stack_no_match() {
        let stack: Container<u8, i32> = Container::Stack([5, 6, 7].into_iter().collect());
        let rebuilt = stack.remove_value(&1).unwrap();
        assert_eq!(pop_order(rebuilt), vec![7, 6, 5]);
    }

    #[test]
    fn test_remove_value_queue_all_matches() {
        let queue: Container<u8, i32> = Container::Queue(VecDeque::from(vec![1, 2, 3, 2]));
        match queue.remove_value(&2).unwrap() {
            Container::Queue(mut q) => {
                let drained: Vec<i32> = std::iter::from_fn(|| q.pop_front()).collect();
                assert_eq!(drained, vec![1, 3]);
            }
            other => panic!("expected a queue, got {}", other.kind()),
        }
    }

    #[test]
    fn test_remove_value_sequence_first_match_only() {
        let seq: Container<u8, i32> = Container::MutableSequence(vec![1, 2, 3, 2]);
        let rebuilt = seq.remove_value(&2).unwrap();
        assert_eq!(rebuilt, Container::MutableSequence(vec![1, 3, 2]));
    }

    #[test]
    fn test_remove_value_unsupported_variants() {
        let map: Container<i32, String> = Container::AssociativeMap(sample_map());
        assert!(matches!(
            map.remove_value(&"A".to_string()),
            Err(CofferError::UnsupportedVariant {
                kind: ContainerKind::AssociativeMap,
                ..
            })
        ));

        let array: Container<u8, i32> = Container::FixedArray(vec![1].into_boxed_slice());
        assert!(array.remove_value(&1).is_err());
    }

    #[test]
    fn test_remove_array_value_all_matches() {
        let array = [1, 2, 3, 2];
        let rebuilt = remove_array_value(&array, &2);
        assert_eq!(&*rebuilt, &[1, 3]);
        assert_eq!(array, [1, 2, 3, 2]);
    }

    #[test]
    fn test_remove_array_value_no_match_copies() {
        let array = vec!["a", "b"];
        let rebuilt = remove_array_value(&array, &"z");
        assert_eq!(&*rebuilt, array.as_slice());
    }
}
