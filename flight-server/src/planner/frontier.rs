//! Min-priority search frontier.
//!
//! Entries pop in ascending `(priority, sequence)` order. The sequence is a
//! counter assigned on push, so entries of equal priority pop in the order
//! they were discovered whatever the heap does internally.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use chrono::Duration;

use crate::domain::{Iata, Segment};

/// A partial itinerary waiting to be expanded.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Elapsed time so far plus the heuristic estimate.
    pub priority: Duration,
    /// Discovery order; unique per frontier.
    pub sequence: u64,
    /// Airport the path currently ends at.
    pub location: Iata,
    /// Segments flown so far, in order.
    pub path: Vec<Arc<Segment>>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped so that BinaryHeap (a max-heap) pops the smallest key.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of partial itineraries.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a path ending at `location` with the given priority.
    pub fn push(&mut self, priority: Duration, location: Iata, path: Vec<Arc<Segment>>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            priority,
            sequence,
            location,
            path,
        });
    }

    /// Pop the entry with the lowest `(priority, sequence)`.
    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of entries ever pushed.
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }
}
