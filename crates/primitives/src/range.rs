//! Regions of a buffer, measured in characters.

/// Which end of a region the caret is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// The caret is at the end (or the region is empty).
	Forward,
	/// The caret is at the beginning.
	Backward,
}

/// Character offset into a buffer.
pub type CharIdx = usize;

/// Number of characters.
pub type CharLen = usize;

/// A text region defined by anchor and head positions.
///
/// The covered span is half-open: `[begin(), end())`. The anchor is the
/// fixed end and the head is the caret. A zero-width region is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the region.
	pub anchor: CharIdx,
	/// The moving end of the region (caret position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a region; `head` is where the caret sits.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// A caret with nothing selected.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// First offset covered.
	#[inline]
	pub fn begin(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Offset just past the region.
	#[inline]
	pub fn end(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	#[inline]
	pub fn len(&self) -> CharLen {
		self.end() - self.begin()
	}

	/// True for a bare caret.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	#[inline]
	pub fn direction(&self) -> Direction {
		match self.head < self.anchor {
			true => Direction::Backward,
			false => Direction::Forward,
		}
	}

	/// Moves both ends through `f`, as when text is inserted or erased.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Whether the two regions share a character, or are the same caret.
	///
	/// Regions that only touch do not overlap.
	pub fn overlaps(&self, other: &Range) -> bool {
		let shared = self.begin() < other.end() && other.begin() < self.end();
		shared || (self.is_empty() && other.is_empty() && self.anchor == other.anchor)
	}

	/// Smallest region covering both; the caret stays on `self`'s side.
	pub fn merge(&self, other: &Range) -> Self {
		let begin = self.begin().min(other.begin());
		let end = self.end().max(other.end());
		match self.direction() {
			Direction::Forward => Self::new(begin, end),
			Direction::Backward => Self::new(end, begin),
		}
	}

	/// Limits both ends to `max_char`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn begin_and_end_ignore_direction() {
		for (r, direction) in [(Range::new(5, 10), Direction::Forward), (Range::new(10, 5), Direction::Backward)] {
			assert_eq!((r.begin(), r.end(), r.len()), (5, 10, 5));
			assert!(!r.is_empty());
			assert_eq!(r.direction(), direction);
		}
	}

	#[test]
	fn caret_is_empty() {
		let r = Range::point(5);
		assert!(r.is_empty());
		assert_eq!(r.len(), 0);
		assert_eq!(r.direction(), Direction::Forward);
	}

	#[test]
	fn touching_regions_do_not_overlap() {
		let line = Range::new(5, 10);
		assert!(line.overlaps(&Range::new(8, 15)));
		assert!(!line.overlaps(&Range::new(10, 15)));
		assert!(!line.overlaps(&Range::point(10)));
		assert!(Range::point(5).overlaps(&Range::point(5)));
	}

	#[test]
	fn merge_keeps_caret_side() {
		let merged = Range::new(10, 5).merge(&Range::new(8, 15));
		assert_eq!(merged, Range::new(15, 5));
	}

	#[test]
	fn clamp_and_map() {
		assert_eq!(Range::new(3, 20).clamp(8), Range::new(3, 8));
		assert_eq!(Range::new(3, 4).map(|p| p + 2), Range::new(5, 6));
	}
}
