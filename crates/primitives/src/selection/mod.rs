use smallvec::{SmallVec, smallvec};

use crate::range::{CharIdx, Range};


/// One or more disjoint regions, one of them primary.
///
/// Regions are kept sorted by [`Range::begin`], so [`Selection::first`] is
/// the topmost and [`Selection::last`] the bottommost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	ranges: SmallVec<[Range; 1]>,
	primary_index: usize,
}

impl Selection {
	/// Builds a selection whose primary is `primary`; overlapping regions merge.
	pub fn new(primary: Range, others: impl IntoIterator<Item = Range>) -> Self {
		let ranges = std::iter::once(primary).chain(others).collect();
		Self::normalized(ranges, 0)
	}

	pub fn single(anchor: CharIdx, head: CharIdx) -> Self {
		Self {
			ranges: smallvec![Range::new(anchor, head)],
			primary_index: 0,
		}
	}

	pub fn point(pos: CharIdx) -> Self {
		Self::single(pos, pos)
	}

	pub fn primary(&self) -> Range {
		self.ranges[self.primary_index]
	}

	pub fn primary_index(&self) -> usize {
		self.primary_index
	}

	/// Topmost region.
	pub fn first(&self) -> Range {
		self.ranges[0]
	}

	/// Bottommost region.
	pub fn last(&self) -> Range {
		self.ranges[self.ranges.len() - 1]
	}

	/// Regions in document order.
	pub fn ranges(&self) -> &[Range] {
		&self.ranges
	}

	#[allow(clippy::len_without_is_empty, reason = "a selection has at least one region")]
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Range> {
		self.ranges.iter()
	}

	/// Maps every region through `f`; regions that now overlap are merged.
	pub fn transform(&self, f: impl FnMut(&Range) -> Range) -> Self {
		Self::normalized(self.ranges.iter().map(f).collect(), self.primary_index)
	}

	/// Limits every region to `max_char`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		self.transform(|r| r.clamp(max_char))
	}

	/// Sorts `ranges` and merges overlapping neighbours.
	///
	/// Touching regions such as `[0, 5)` and `[5, 10)` stay apart. The primary
	/// follows its region into whichever merged region absorbs it.
	fn normalized(mut ranges: SmallVec<[Range; 1]>, primary_index: usize) -> Self {
		if ranges.len() == 1 {
			return Self { ranges, primary_index: 0 };
		}

		let primary = ranges[primary_index];
		ranges.sort_by_key(Range::begin);

		let mut merged: SmallVec<[Range; 1]> = SmallVec::with_capacity(ranges.len());
		let mut primary_index = 0;
		for range in ranges {
			match merged.last_mut() {
				Some(prev) if prev.overlaps(&range) => {
					let absorbs_primary = *prev == primary || range == primary;
					*prev = prev.merge(&range);
					if absorbs_primary {
						primary_index = merged.len() - 1;
					}
				}
				_ => {
					if range == primary {
						primary_index = merged.len();
					}
					merged.push(range);
				}
			}
		}

		Self {
			ranges: merged,
			primary_index,
		}
	}
}
