use crate::error::{Error, Result};
use crate::util::SliceHelp;
use core::cmp::{self, Ordering};

pub type CodePoint = u32;

/// The maximum (inclusive) code point.
pub const CODE_POINT_MAX: CodePoint = 0x10FFFF;

/// An inclusive range of code points.
/// This is more efficient than InclusiveRange because it does not need to carry
/// around the `Option<bool>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub(crate) first: CodePoint,
    pub(crate) last: CodePoint,
}

impl Interval {
    /// Construct an interval from trusted bounds, as found in generated tables.
    pub(crate) const fn new(first: CodePoint, last: CodePoint) -> Interval {
        debug_assert!(first <= last);
        debug_assert!(last <= CODE_POINT_MAX);
        Interval { first, last }
    }

    /// Construct an interval, checking that the bounds lie in the code space
    /// and are ordered. A bound above CODE_POINT_MAX is reported as
    /// OutOfRange, reversed bounds as ReversedInterval.
    pub fn try_new(first: CodePoint, last: CodePoint) -> Result<Interval> {
        if last > CODE_POINT_MAX {
            return Err(Error::OutOfRange(last));
        }
        if first > last {
            return Err(Error::ReversedInterval(first, last));
        }
        Ok(Interval { first, last })
    }

    /// The first code point of the interval.
    #[inline]
    pub fn first(self) -> CodePoint {
        self.first
    }

    /// The last code point of the interval, inclusive.
    #[inline]
    pub fn last(self) -> CodePoint {
        self.last
    }

    #[inline(always)]
    pub fn compare(self, cp: u32) -> Ordering {
        if self.first > cp {
            Ordering::Greater
        } else if self.last < cp {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Return whether self is before rhs.
    fn is_before(self, other: Interval) -> bool {
        self.last < other.first
    }

    /// Return whether self is strictly before rhs.
    /// "Strictly" here means there is at least one value after the end of self,
    /// and before the start of rhs. Overlapping *or abutting* intervals are
    /// not considered strictly before.
    fn is_strictly_before(self, rhs: Interval) -> bool {
        self.last + 1 < rhs.first
    }

    /// Compare two intervals.
    /// Overlapping *or abutting* intervals are considered equal.
    fn mergecmp(self, rhs: Interval) -> cmp::Ordering {
        if self.is_strictly_before(rhs) {
            Ordering::Less
        } else if rhs.is_strictly_before(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Return whether self is mergeable with rhs.
    fn mergeable(self, rhs: Interval) -> bool {
        self.mergecmp(rhs) == Ordering::Equal
    }

    /// Return whether self contains a code point \p cp.
    pub fn contains(self, cp: CodePoint) -> bool {
        self.first <= cp && cp <= self.last
    }

    /// Return whether self overlaps 'other'.
    /// Overlaps means that we share at least one code point with 'other'.
    pub fn overlaps(self, other: Interval) -> bool {
        !self.is_before(other) && !other.is_before(self)
    }

    /// Return the interval of codepoints.
    pub fn codepoints(self) -> core::ops::Range<u32> {
        self.first..(self.last + 1)
    }

    /// Return the number of contained code points.
    pub fn count_codepoints(self) -> usize {
        (self.last - self.first + 1) as usize
    }
}

#[inline(always)]
pub(crate) fn interval_contains(interval: &[Interval], cp: u32) -> bool {
    interval.binary_search_by(|iv| iv.compare(cp)).is_ok()
}

/// Merge two intervals, which must be overlapping or abutting.
fn merge_intervals(x: Interval, y: &Interval) -> Interval {
    debug_assert!(x.mergeable(*y), "Ranges not mergeable");
    Interval {
        first: cmp::min(x.first, y.first),
        last: cmp::max(x.last, y.last),
    }
}

/// A set of code points stored as disjoint, non-abutting, sorted intervals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    ivs: Vec<Interval>,
}

impl CodePointSet {
    pub fn new() -> CodePointSet {
        CodePointSet { ivs: Vec::new() }
    }

    /// Return true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ivs.is_empty()
    }

    /// Return true if we contain all code points.
    pub fn contains_all_codepoints(&self) -> bool {
        self.ivs.len() == 1 && self.ivs[0] == Interval::new(0, CODE_POINT_MAX)
    }

    /// Return whether \p cp is a member of the set.
    /// Code points beyond CODE_POINT_MAX are reported as OutOfRange.
    #[inline]
    pub fn contains(&self, cp: CodePoint) -> Result<bool> {
        if cp > CODE_POINT_MAX {
            return Err(Error::OutOfRange(cp));
        }
        Ok(interval_contains(&self.ivs, cp))
    }

    #[inline]
    fn assert_is_well_formed(&self) {
        if cfg!(debug_assertions) {
            for iv in &self.ivs {
                debug_assert!(iv.last <= CODE_POINT_MAX);
                debug_assert!(iv.first <= iv.last);
            }
            for w in self.ivs.windows(2) {
                debug_assert!(w[0].is_strictly_before(w[1]));
            }
        }
    }

    /// Construct from sorted, disjoint intervals. Note these are not allowed to
    /// even abut.
    pub(crate) fn from_sorted_disjoint_intervals(ivs: Vec<Interval>) -> CodePointSet {
        let res = CodePointSet { ivs };
        res.assert_is_well_formed();
        res
    }

    /// Construct from intervals in any order, which may overlap or abut.
    pub fn from_intervals(mut ivs: Vec<Interval>) -> CodePointSet {
        ivs.sort_unstable_by_key(|iv| iv.first);
        let mut merged: Vec<Interval> = Vec::with_capacity(ivs.len());
        for iv in ivs {
            match merged.last_mut() {
                Some(prev) if prev.mergeable(iv) => *prev = merge_intervals(*prev, &iv),
                _ => merged.push(iv),
            }
        }
        CodePointSet::from_sorted_disjoint_intervals(merged)
    }

    /// Construct from a list of lone code points and a list of inclusive
    /// ranges, neither of which need be sorted.
    pub fn from_lone_and_ranges(
        lone: &[CodePoint],
        ranges: &[(CodePoint, CodePoint)],
    ) -> Result<CodePointSet> {
        let ivs = lone
            .iter()
            .map(|&cp| Interval::try_new(cp, cp))
            .chain(ranges.iter().map(|&(first, last)| Interval::try_new(first, last)))
            .collect::<Result<Vec<_>>>()?;
        Ok(CodePointSet::from_intervals(ivs))
    }

    /// Add an interval of code points to the set.
    pub fn add(&mut self, new_iv: Interval) {
        // Find the mergeable subarray, that is, the range of intervals that intersect
        // or abut new_iv.
        let mergeable = self.ivs.equal_range_by(|iv| iv.mergecmp(new_iv));

        // Merge all the overlapping intervals (possibly none), and then replace the
        // range. drain() is not effectively optimized, so avoid it in the cases of a
        // new entry or replacing an existing entry.
        match mergeable.end - mergeable.start {
            0 => {
                self.ivs.insert(mergeable.start, new_iv);
            }
            1 => {
                let entry = &mut self.ivs[mergeable.start];
                *entry = merge_intervals(*entry, &new_iv);
            }
            _ => {
                let merged_iv: Interval = self.ivs[mergeable.clone()]
                    .iter()
                    .fold(new_iv, merge_intervals);
                self.ivs[mergeable.start] = merged_iv;
                self.ivs.drain(mergeable.start + 1..mergeable.end);
            }
        }
        self.assert_is_well_formed();
    }

    /// Add a single code point to the set.
    #[inline]
    pub fn add_one(&mut self, cp: CodePoint) {
        self.add(Interval {
            first: cp,
            last: cp,
        })
    }

    /// Add another code point set.
    pub fn add_set(&mut self, mut rhs: CodePointSet) {
        // Prefer to add to the set with more intervals.
        if self.ivs.len() < rhs.ivs.len() {
            core::mem::swap(self, &mut rhs);
        }
        for iv in rhs.intervals() {
            self.add(*iv)
        }
    }

    /// \return a new set containing the code points of both self and \p rhs.
    pub fn union(&self, rhs: &CodePointSet) -> CodePointSet {
        let mut ivs = Vec::with_capacity(self.ivs.len() + rhs.ivs.len());
        ivs.extend_from_slice(&self.ivs);
        ivs.extend_from_slice(&rhs.ivs);
        CodePointSet::from_intervals(ivs)
    }

    /// \return the intervals
    pub fn intervals(&self) -> &[Interval] {
        self.ivs.as_slice()
    }

    /// \return the number of contained code points.
    pub fn count_codepoints(&self) -> usize {
        self.ivs.iter().map(|iv| iv.count_codepoints()).sum()
    }

    /// \return an iterator over every contained code point, ascending.
    pub fn iter(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.ivs.iter().flat_map(|iv| iv.codepoints())
    }

    /// \return an inverted set: a set containing every code point NOT in the
    /// receiver.
    pub fn inverted(&self) -> CodePointSet {
        // The intervals we collect.
        let mut inverted_ivs = Vec::with_capacity(self.ivs.len() + 1);

        // The first code point *not* in the previous interval.
        let mut start: CodePoint = 0;
        for iv in &self.ivs {
            if start < iv.first {
                inverted_ivs.push(Interval {
                    first: start,
                    last: iv.first - 1,
                })
            }
            start = iv.last + 1;
        }
        if start <= CODE_POINT_MAX {
            inverted_ivs.push(Interval {
                first: start,
                last: CODE_POINT_MAX,
            })
        }
        CodePointSet::from_sorted_disjoint_intervals(inverted_ivs)
    }

    /// \return the set of code points in [\p lo, \p hi] which are NOT in the
    /// receiver.
    pub fn complement(&self, lo: CodePoint, hi: CodePoint) -> Result<CodePointSet> {
        if hi > CODE_POINT_MAX {
            return Err(Error::OutOfRange(hi));
        }
        if lo > hi {
            return Err(Error::ReversedInterval(lo, hi));
        }
        let mut ivs = Vec::new();
        // The first code point of the domain not yet accounted for.
        let mut start = lo;
        let mut exhausted = false;
        for iv in &self.ivs {
            if iv.last < lo {
                continue;
            }
            if iv.first > hi {
                break;
            }
            if start < iv.first {
                ivs.push(Interval {
                    first: start,
                    last: iv.first - 1,
                });
            }
            if iv.last >= hi {
                exhausted = true;
                break;
            }
            start = iv.last + 1;
        }
        if !exhausted {
            ivs.push(Interval {
                first: start,
                last: hi,
            });
        }
        Ok(CodePointSet::from_sorted_disjoint_intervals(ivs))
    }
}

impl FromIterator<Interval> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        CodePointSet::from_intervals(iter.into_iter().collect())
    }
}
