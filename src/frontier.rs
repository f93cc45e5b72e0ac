use std::cmp::Ordering;

/// An entry of the open set: `(Node, Cost when pushed, priority)`.
///
/// Ordered in reverse by priority only, so that a [`BinaryHeap`](std::collections::BinaryHeap)
/// pops the cheapest entry first. Nodes never take part in the comparison.
pub(crate) struct Element<N, C>(pub N, pub C, pub C);

impl<N, C: Ord> PartialEq for Element<N, C> {
	fn eq(&self, rhs: &Self) -> bool {
		self.2 == rhs.2
	}
}
impl<N, C: Ord> Eq for Element<N, C> {}

impl<N, C: Ord> PartialOrd for Element<N, C> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<N, C: Ord> Ord for Element<N, C> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2.cmp(&self.2)
	}
}

#[cfg(test)]
mod tests {
	use super::Element;
	use std::collections::BinaryHeap;

	#[test]
	fn pops_lowest_priority_first() {
		let mut heap = BinaryHeap::new();
		heap.push(Element('a', 0, 7));
		heap.push(Element('b', 3, 2));
		heap.push(Element('c', 1, 5));

		let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|e| e.0)).collect();
		assert_eq!(order, vec!['b', 'c', 'a']);
	}
}
