use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// An addressable min-priority queue for shortest path algorithms.
///
/// Every element is present at most once. Changing the priority of an element that
/// is already queued removes the old entry and reinserts it with the new one, which
/// gives decrease-key in `O(log n)`. Elements with equal priority come out in
/// ascending element order, so the extraction order is fully deterministic.
#[derive(Debug)]
pub struct IndexedPriorityQueue<V, P>
where
    V: Copy + Eq + Hash + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Ordered entries; the first one is the minimum
    entries: BTreeSet<(P, V)>,

    /// Current priority of every queued element
    priorities: HashMap<V, P>,
}

impl<V, P> IndexedPriorityQueue<V, P>
where
    V: Copy + Eq + Hash + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            entries: BTreeSet::new(),
            priorities: HashMap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the element is currently queued
    pub fn contains(&self, vertex: &V) -> bool {
        self.priorities.contains_key(vertex)
    }

    /// Returns the queued priority of an element
    pub fn priority(&self, vertex: &V) -> Option<P> {
        self.priorities.get(vertex).copied()
    }

    /// Inserts an element, or moves it to a new priority if it is already queued
    pub fn push(&mut self, vertex: V, priority: P) {
        self.remove(&vertex);
        self.entries.insert((priority, vertex));
        self.priorities.insert(vertex, priority);
    }

    /// Removes an element wherever it sits in the queue, returning its priority
    pub fn remove(&mut self, vertex: &V) -> Option<P> {
        let priority = self.priorities.remove(vertex)?;
        self.entries.remove(&(priority, *vertex));
        Some(priority)
    }

    /// Removes the element with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        let (priority, vertex) = self.entries.pop_first()?;
        self.priorities.remove(&vertex);
        Some((vertex, priority))
    }

    /// Returns the element with the lowest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.entries.first().map(|&(priority, vertex)| (vertex, priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
        self.priorities.clear();
    }
}

impl<V, P> Default for IndexedPriorityQueue<V, P>
where
    V: Copy + Eq + Hash + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(1usize, OrderedFloat(3.0));
        queue.push(2usize, OrderedFloat(1.0));
        queue.push(3usize, OrderedFloat(2.0));

        assert_eq!(queue.peek(), Some((2, OrderedFloat(1.0))));
        assert_eq!(queue.pop(), Some((2, OrderedFloat(1.0))));
        assert_eq!(queue.pop(), Some((3, OrderedFloat(2.0))));
        assert_eq!(queue.pop(), Some((1, OrderedFloat(3.0))));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn ties_break_by_smaller_element() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(7usize, OrderedFloat(f64::INFINITY));
        queue.push(4usize, OrderedFloat(f64::INFINITY));
        queue.push(5usize, OrderedFloat(f64::INFINITY));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec![4, 5, 7]);
    }

    #[test]
    fn push_existing_element_replaces_its_priority() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(1usize, OrderedFloat(10.0));
        queue.push(2usize, OrderedFloat(5.0));
        queue.push(1usize, OrderedFloat(1.0));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.priority(&1), Some(OrderedFloat(1.0)));
        assert_eq!(queue.pop(), Some((1, OrderedFloat(1.0))));
        assert!(!queue.contains(&1));
        assert_eq!(queue.pop(), Some((2, OrderedFloat(5.0))));
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut queue = IndexedPriorityQueue::new();
        queue.push(1usize, OrderedFloat(1.0));
        queue.push(2usize, OrderedFloat(2.0));

        assert_eq!(queue.remove(&1), Some(OrderedFloat(1.0)));
        assert_eq!(queue.remove(&1), None);
        assert_eq!(queue.len(), 1);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }
}
