use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::generator::Candidate;

/// Queue of candidates still to be processed
pub(crate) trait Frontier {
    fn push(&mut self, candidate: Candidate);
    fn pop(&mut self) -> Option<Candidate>;
    fn len(&self) -> usize;
}

/// First in, first out
#[derive(Debug, Default)]
pub(crate) struct FifoQueue {
    items: VecDeque<Candidate>,
}

impl Frontier for FifoQueue {
    fn push(&mut self, candidate: Candidate) {
        self.items.push_back(candidate);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
struct QueueEntry {
    distance: f64,
    sequence: u64,
    candidate: Candidate,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smaller distance, then earlier insertion, ranks higher
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Closest value to the target first; ties go to the earliest insertion
#[derive(Debug)]
pub(crate) struct DistanceQueue {
    target: f64,
    next_sequence: u64,
    heap: BinaryHeap<QueueEntry>,
}

impl DistanceQueue {
    pub(crate) fn new(target: f64) -> Self {
        Self {
            target,
            next_sequence: 0,
            heap: BinaryHeap::new(),
        }
    }
}

impl Frontier for DistanceQueue {
    fn push(&mut self, candidate: Candidate) {
        let entry = QueueEntry {
            distance: candidate.distance(self.target),
            sequence: self.next_sequence,
            candidate,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|entry| entry.candidate)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;

    fn candidate(digits: &[u8]) -> Candidate {
        match Expression::literal(digits).map(Candidate::new) {
            Some(Ok(candidate)) => candidate,
            _ => panic!("invalid literal digits {:?}", digits),
        }
    }

    #[test]
    fn test_distance_queue_orders_by_distance_then_insertion() {
        let mut queue = DistanceQueue::new(10.0);
        queue.push(candidate(&[3]));
        queue.push(candidate(&[1, 1]));
        queue.push(candidate(&[9]));
        queue.push(candidate(&[7]));
        assert_eq!(queue.len(), 4);

        let order: Vec<f64> = std::iter::from_fn(|| queue.pop().map(|c| c.value)).collect();
        assert_eq!(order, vec![11.0, 9.0, 7.0, 3.0]);
    }

    #[test]
    fn test_fifo_queue_preserves_order() {
        let mut queue = FifoQueue::default();
        queue.push(candidate(&[3]));
        queue.push(candidate(&[1, 1]));
        queue.push(candidate(&[9]));

        let order: Vec<f64> = std::iter::from_fn(|| queue.pop().map(|c| c.value)).collect();
        assert_eq!(order, vec![3.0, 11.0, 9.0]);
    }
}
