// This file is part of Gear.

// Copyright (C) 2023-2026 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! [`Interval`] implementation.

use crate::{
    error::{DomainError, ParseError},
    numerated::Numerated,
};
use arrayvec::ArrayVec;
use std::{
    ops::{BitAnd, BitOr, BitXor, RangeInclusive, Sub},
    str::FromStr,
};

/// Result of cutting one interval with another: zero, one or two intervals.
pub type Pieces<T> = ArrayVec<Interval<T>, 2>;

/// Closed directed interval `[start, end]`.
///
/// `start` may be bigger than `end`: then interval is __decreasing__,
/// but still covers all points between `end` and `start`.
///
/// Equality and hash are defined on the literal `(start, end)` pair, so
/// `(0, 1)` and `(1, 0)` are different intervals. All set relations
/// (containment, subset, disjointness) use only [`low`](Self::low) and
/// [`high`](Self::high), so for them orientation does not matter.
///
/// Results of interval arithmetic keep orientation of the operand they
/// were cut from: `union`, `intersection` and `difference` follow `self`,
/// `symmetric_difference` consists of pieces of both operands, each in
/// its own orientation. A one point result has no direction and is always
/// stored as `(p, p)`.
///
/// Reference behavior covers increasing `self` with either `other`, and
/// decreasing `self` with decreasing `other`. Decreasing `self` with
/// increasing `other` has no reference and is unspecified: it follows the
/// same rule, but callers should not rely on the orientation of its results.
///
/// There is no `PartialOrd`: two intervals over the same points in opposite
/// directions are subsets of each other but not equal, so a subset order
/// would contradict `==`. Use [`is_subset`](Self::is_subset) and friends.
///
/// # Examples
/// ```
/// use integer_set::{DomainError, Interval};
///
/// let a = Interval::new(0, 10);
/// assert_eq!(a.union(&Interval::new(10, 20)), Ok(Interval::new(0, 20)));
/// assert_eq!(a.union(&Interval::new(11, 20)), Err(DomainError::Disjoint));
/// assert_eq!(
///     a.difference(&Interval::new(1, 9)).as_slice(),
///     &[Interval::new(0, 0), Interval::new(10, 10)],
/// );
/// assert_eq!(Interval::new(10, 0).intersection(&Interval::new(20, 5)), Ok(Interval::new(10, 5)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Debug)]
#[display("({start}, {end})")]
#[debug("({start:?}, {end:?})")]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Numerated> Interval<T> {
    /// Creates interval from `start` to `end` in any orientation.
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// First point of the interval in its own direction.
    pub fn start(&self) -> T {
        self.start
    }

    /// Last point of the interval in its own direction.
    pub fn end(&self) -> T {
        self.end
    }

    /// Smallest covered point.
    pub fn low(&self) -> T {
        self.start.min(self.end)
    }

    /// Biggest covered point.
    pub fn high(&self) -> T {
        self.start.max(self.end)
    }

    /// `start <= end`. One point interval is increasing.
    pub fn is_increasing(&self) -> bool {
        self.start <= self.end
    }

    /// `start > end`.
    pub fn is_decreasing(&self) -> bool {
        !self.is_increasing()
    }

    /// The same points in the opposite direction.
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The same points as increasing interval.
    pub fn normalized(self) -> Self {
        Self::new(self.low(), self.high())
    }

    /// Amount of covered points: `|end - start| + 1`.
    /// Returns `None` if it does not fit into `T::Distance`.
    pub fn len(&self) -> Option<T::Distance> {
        self.start.points_between(self.end)
    }

    /// Returns iterator over covered points, from `start` to `end`.
    pub fn iter(&self) -> IntervalIter<T> {
        IntervalIter {
            next: Some(self.start),
            end: self.end,
            ascending: self.is_increasing(),
        }
    }

    /// Returns `true` if `point` is between `low` and `high`.
    pub fn contains(&self, point: T) -> bool {
        self.low() <= point && point <= self.high()
    }

    /// Returns `true` if intervals have no common points.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.high() < other.low() || other.high() < self.low()
    }

    /// Returns `true` if each point of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        other.low() <= self.low() && self.high() <= other.high()
    }

    /// Returns `true` if `self` is subset of `other` and `other` has more points.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && !other.is_subset(self)
    }

    /// Returns `true` if each point of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is superset of `other` and has more points.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    fn oriented(&self, low: T, high: T) -> Self {
        if self.is_increasing() {
            Self::new(low, high)
        } else {
            Self::new(high, low)
        }
    }

    /// Interval covering points of both `self` and `other`.
    ///
    /// Operands must share at least one point, otherwise fails
    /// with [`DomainError::Disjoint`].
    pub fn union(&self, other: &Self) -> Result<Self, DomainError> {
        if self.is_disjoint(other) {
            return Err(DomainError::Disjoint);
        }

        Ok(self.oriented(self.low().min(other.low()), self.high().max(other.high())))
    }

    /// Interval covering points common for `self` and `other`.
    ///
    /// Fails with [`DomainError::Disjoint`] if there are no such points.
    pub fn intersection(&self, other: &Self) -> Result<Self, DomainError> {
        if self.is_disjoint(other) {
            return Err(DomainError::Disjoint);
        }

        Ok(self.oriented(self.low().max(other.low()), self.high().min(other.high())))
    }

    /// Points of `self` which are not in `other`, ordered by position.
    pub fn difference(&self, other: &Self) -> Pieces<T> {
        let mut pieces = Pieces::new();

        if self.is_disjoint(other) {
            pieces.push(*self);
            return pieces;
        }

        // Intervals overlap, so `self` has a piece on some side
        // iff `other` does not reach `self` bound on that side.
        if let Some(left_end) = other.low().dec_if_gt(self.low()) {
            pieces.push(self.oriented(self.low(), left_end));
        }

        if let Some(right_start) = other.high().inc_if_lt(self.high()) {
            pieces.push(self.oriented(right_start, self.high()));
        }

        pieces
    }

    /// Points covered by exactly one of `self` and `other`:
    /// `self - other` followed by `other - self`.
    pub fn symmetric_difference(&self, other: &Self) -> Pieces<T> {
        let mut pieces = self.difference(other);

        for piece in other.difference(self) {
            let res = pieces.try_push(piece);
            debug_assert!(
                res.is_ok(),
                "symmetric difference of two intervals has at most two components"
            );
        }

        pieces
    }

    /// [`union`](Self::union) folded over `others` from left to right.
    pub fn union_all<'a, I>(&self, others: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others
            .into_iter()
            .try_fold(*self, |acc, other| acc.union(other))
    }

    /// [`intersection`](Self::intersection) folded over `others` from left to right.
    pub fn intersection_all<'a, I>(&self, others: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others
            .into_iter()
            .try_fold(*self, |acc, other| acc.intersection(other))
    }

    /// Points of `self` which are in none of `others`, ordered by position.
    pub fn difference_all<'a, I>(&self, others: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others.into_iter().fold(vec![*self], |pieces, other| {
            pieces.iter().flat_map(|piece| piece.difference(other)).collect()
        })
    }

    /// [`symmetric_difference`](Self::symmetric_difference) folded over `others`
    /// from left to right.
    pub fn symmetric_difference_all<'a, I>(&self, others: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        others.into_iter().fold(vec![*self], |pieces, other| {
            // `pieces` are disjoint, so each point of `other` is in at most one of them.
            let mut res: Vec<Self> = pieces
                .iter()
                .flat_map(|piece| piece.difference(other))
                .collect();
            res.extend(other.difference_all(&pieces));
            res
        })
    }
}

/// Iterator over points of [`Interval`] in its own direction.
#[derive(Clone, Debug)]
pub struct IntervalIter<T> {
    next: Option<T>,
    end: T,
    ascending: bool,
}

impl<T: Numerated> Iterator for IntervalIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = if self.ascending {
            current.inc_if_lt(self.end)
        } else {
            current.dec_if_gt(self.end)
        };
        Some(current)
    }
}

impl<T: Numerated> IntoIterator for Interval<T> {
    type Item = T;
    type IntoIter = IntervalIter<T>;

    fn into_iter(self) -> IntervalIter<T> {
        self.iter()
    }
}

impl<T: Numerated> From<T> for Interval<T> {
    fn from(point: T) -> Self {
        Self::new(point, point)
    }
}

impl<T: Numerated> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}

impl<T: Numerated> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = DomainError;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        if start > end {
            return Err(DomainError::EmptyRange);
        }
        Ok(Self::new(start, end))
    }
}

impl<T: Numerated> From<Interval<T>> for RangeInclusive<T> {
    fn from(interval: Interval<T>) -> Self {
        interval.low()..=interval.high()
    }
}

impl<T: Numerated> BitOr for Interval<T> {
    type Output = Result<Self, DomainError>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T: Numerated> BitAnd for Interval<T> {
    type Output = Result<Self, DomainError>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T: Numerated> Sub for Interval<T> {
    type Output = Pieces<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}

impl<T: Numerated> BitXor for Interval<T> {
    type Output = Pieces<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(&rhs)
    }
}

pub(crate) fn parse_bound<T: FromStr>(s: &str) -> Result<T, ParseError> {
    let s = s.trim();
    s.parse().map_err(|_| ParseError::InvalidBound(s.into()))
}

impl<T: Numerated + FromStr> FromStr for Interval<T> {
    type Err = ParseError;

    /// Parses `(start, end)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| ParseError::unexpected("(start, end)", s))?;
        let (start, end) = inner
            .split_once(',')
            .ok_or_else(|| ParseError::unexpected(",", inner))?;

        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i(start: i32, end: i32) -> Interval<i32> {
        Interval::new(start, end)
    }

    #[test]
    fn union() {
        // increasing | increasing
        assert_eq!(i(0, 10) | i(10, 20), Ok(i(0, 20)));
        assert_eq!(i(0, 10) | i(-10, 0), Ok(i(-10, 10)));
        // increasing | decreasing
        assert_eq!(i(0, 10) | i(20, 10), Ok(i(0, 20)));
        assert_eq!(i(0, 10) | i(0, -10), Ok(i(-10, 10)));
        // decreasing | decreasing
        assert_eq!(i(10, 0) | i(20, 10), Ok(i(20, 0)));
        assert_eq!(i(10, 0) | i(0, -10), Ok(i(10, -10)));
        // containment
        assert_eq!(i(0, 10) | i(1, 9), Ok(i(0, 10)));
        assert_eq!(i(0, 10) | i(-1, 11), Ok(i(-1, 11)));
        // no common point
        assert_eq!(i(0, 10) | i(11, 20), Err(DomainError::Disjoint));
        assert_eq!(i(11, 20).union(&i(0, 10)), Err(DomainError::Disjoint));
        assert_eq!(i(0, 10).union(&i(20, 11)), Err(DomainError::Disjoint));
    }

    #[test]
    fn intersection() {
        assert_eq!(i(0, 10) & i(5, 20), Ok(i(5, 10)));
        assert_eq!(i(0, 10) & i(-10, 5), Ok(i(0, 5)));
        assert_eq!(i(0, 10) & i(20, 5), Ok(i(5, 10)));
        assert_eq!(i(0, 10) & i(5, -10), Ok(i(0, 5)));
        assert_eq!(i(10, 0) & i(20, 5), Ok(i(10, 5)));
        assert_eq!(i(10, 0) & i(5, -10), Ok(i(5, 0)));
        assert_eq!(i(0, 10) & i(1, 9), Ok(i(1, 9)));
        assert_eq!(i(0, 10) & i(-1, 11), Ok(i(0, 10)));
        assert_eq!(i(0, 10) & i(11, 20), Err(DomainError::Disjoint));
        assert_eq!(i(0, 10) & i(10, 20), Ok(i(10, 10)));
    }

    #[test]
    fn difference() {
        assert_eq!((i(0, 10) - i(5, 20)).as_slice(), &[i(0, 4)]);
        assert_eq!((i(0, 10) - i(-10, 5)).as_slice(), &[i(6, 10)]);
        assert_eq!((i(0, 10) - i(20, 5)).as_slice(), &[i(0, 4)]);
        assert_eq!((i(0, 10) - i(5, -10)).as_slice(), &[i(6, 10)]);
        assert_eq!((i(10, 0) - i(20, 5)).as_slice(), &[i(4, 0)]);
        assert_eq!((i(10, 0) - i(5, -10)).as_slice(), &[i(10, 6)]);
        assert_eq!((i(0, 10) - i(1, 9)).as_slice(), &[i(0, 0), i(10, 10)]);
        assert!((i(0, 10) - i(-1, 11)).is_empty());
        assert!((i(0, 10) - i(0, 10)).is_empty());
        assert_eq!((i(0, 10) - i(11, 20)).as_slice(), &[i(0, 10)]);
    }

    #[test]
    fn symmetric_difference() {
        assert_eq!((i(0, 10) ^ i(5, 20)).as_slice(), &[i(0, 4), i(11, 20)]);
        assert_eq!((i(0, 10) ^ i(-10, 5)).as_slice(), &[i(6, 10), i(-10, -1)]);
        assert_eq!((i(0, 10) ^ i(20, 5)).as_slice(), &[i(0, 4), i(20, 11)]);
        assert_eq!((i(0, 10) ^ i(5, -10)).as_slice(), &[i(6, 10), i(-1, -10)]);
        assert_eq!((i(10, 0) ^ i(20, 5)).as_slice(), &[i(4, 0), i(20, 11)]);
        assert_eq!((i(10, 0) ^ i(5, -10)).as_slice(), &[i(10, 6), i(-1, -10)]);
        assert_eq!((i(0, 10) ^ i(1, 9)).as_slice(), &[i(0, 0), i(10, 10)]);
        assert_eq!((i(0, 10) ^ i(-1, 11)).as_slice(), &[i(-1, -1), i(11, 11)]);
        assert_eq!((i(0, 10) ^ i(11, 20)).as_slice(), &[i(0, 10), i(11, 20)]);
        assert!((i(0, 10) ^ i(10, 0)).is_empty());
    }

    #[test]
    fn variadic() {
        assert_eq!(i(0, 1).union_all(&[i(1, 2), i(2, 3)]), Ok(i(0, 3)));
        assert_eq!(i(0, 1).union_all(&[i(5, 6), i(2, 3)]), Err(DomainError::Disjoint));
        assert_eq!(i(0, 10).intersection_all(&[i(3, 9), i(1, 6)]), Ok(i(3, 6)));
        assert_eq!(
            i(0, 10).intersection_all(&[i(3, 9), i(-5, -1)]),
            Err(DomainError::Disjoint)
        );
        assert_eq!(
            i(0, 10).difference_all(&[i(1, 2), i(8, 9)]),
            vec![i(0, 0), i(3, 7), i(10, 10)]
        );
        assert_eq!(
            i(0, 10).symmetric_difference_all(&[i(1, 9)]),
            vec![i(0, 0), i(10, 10)]
        );
        assert_eq!(
            i(0, 10).symmetric_difference_all(&[i(5, 15), i(12, 20)]),
            vec![i(0, 4), i(11, 11), i(16, 20)]
        );
        assert_eq!(i(0, 10).union_all(std::iter::empty()), Ok(i(0, 10)));
        assert_eq!(i(0, 10).difference_all(std::iter::empty()), vec![i(0, 10)]);
    }

    #[test]
    fn one_point_results_of_decreasing() {
        let a = i(10, 0);
        assert_eq!(a & i(10, 20), Ok(i(10, 10)));
        assert_eq!(a & i(-5, 0), Ok(i(0, 0)));
        assert_eq!(i(0, -47) & i(-47, -47), Ok(i(-47, -47)));
        assert_eq!((a - i(1, 10)).as_slice(), &[i(0, 0)]);
        assert_eq!((a - i(9, -3)).as_slice(), &[i(10, 10)]);
        assert_eq!((a ^ i(10, -1)).as_slice(), &[i(-1, -1)]);
        assert_eq!(i(0, 0) | i(0, 0), Ok(i(0, 0)));
    }

    #[test]
    fn hash_and_eq_keep_orientation() {
        use std::{
            collections::hash_map::DefaultHasher,
            hash::{Hash, Hasher},
        };

        fn hash_of(interval: Interval<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            interval.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(i(0, 1)), hash_of(i(0, 1)));
        assert_ne!(hash_of(i(0, 1)), hash_of(i(1, 0)));
        assert_ne!(i(0, 1), i(1, 0));
        assert!(i(0, 1).is_subset(&i(1, 0)) && i(1, 0).is_subset(&i(0, 1)));
    }

    #[test]
    fn contains() {
        assert!(i(0, 0).contains(0));
        assert!(!i(0, 0).contains(1));
        assert!(!i(0, 0).contains(-1));
        assert!(i(10, 0).contains(5));
        assert!(!i(10, 0).contains(11));
    }

    #[test]
    fn relations() {
        assert!(i(0, 0).is_disjoint(&i(1, 1)));
        assert!(!i(0, 0).is_disjoint(&i(0, 1)));
        assert!(!i(0, 0).is_disjoint(&i(1, 0)));

        assert!(i(0, 10).is_subset(&i(0, 10)));
        assert!(!i(-1, 10).is_subset(&i(0, 10)));
        assert!(!i(0, 11).is_subset(&i(0, 10)));
        assert!(i(10, 0).is_subset(&i(0, 10)));

        assert!(i(1, 10).is_proper_subset(&i(0, 10)));
        assert!(i(0, 9).is_proper_subset(&i(0, 10)));
        assert!(!i(0, 10).is_proper_subset(&i(0, 10)));
        assert!(!i(10, 0).is_proper_subset(&i(0, 10)));
        assert!(!i(-1, 10).is_proper_subset(&i(0, 10)));
        assert!(!i(0, 11).is_proper_subset(&i(0, 10)));

        assert!(i(0, 10).is_superset(&i(0, 10)));
        assert!(!i(1, 10).is_superset(&i(0, 10)));
        assert!(!i(0, 9).is_superset(&i(0, 10)));

        assert!(i(0, 11).is_proper_superset(&i(0, 10)));
        assert!(i(-1, 10).is_proper_superset(&i(0, 10)));
        assert!(!i(0, 10).is_proper_superset(&i(0, 10)));
        assert!(!i(1, 10).is_proper_superset(&i(0, 10)));
        assert!(!i(0, 9).is_proper_superset(&i(0, 10)));
    }

    #[test]
    fn len() {
        assert_eq!(i(0, 0).len(), Some(1));
        assert_eq!(i(0, 9).len(), Some(10));
        assert_eq!(i(0, 99).len(), Some(100));
        assert_eq!(i(99, 0).len(), Some(100));
        assert_eq!(Interval::new(u8::MIN, u8::MAX).len(), None);
        assert_eq!(Interval::new(1u8, u8::MAX).len(), Some(255));
    }

    #[test]
    fn iter() {
        assert_eq!(i(0, 3).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(i(3, 0).iter().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(i(7, 7).into_iter().collect::<Vec<_>>(), vec![7]);
        assert_eq!(Interval::new(253u8, 255).iter().count(), 3);
        assert_eq!(Interval::new(-126i8, i8::MIN).iter().count(), 3);
    }

    #[test]
    fn conversions() {
        assert_eq!(Interval::from(5), i(5, 5));
        assert_eq!(Interval::from((3, -3)), i(3, -3));
        assert_eq!(Interval::try_from(1..=4), Ok(i(1, 4)));
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 4..=1;
        assert_eq!(Interval::try_from(empty), Err(DomainError::EmptyRange));
        assert_eq!(RangeInclusive::from(i(4, 1)), 1..=4);
        assert_eq!(i(2, 1).reversed(), i(1, 2));
        assert_eq!(i(2, 1).normalized(), i(1, 2));
        assert_eq!(i(1, 2).normalized(), i(1, 2));
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(i(1, 2).to_string(), "(1, 2)");
        assert_eq!(format!("{:?}", i(-1, 2)), "(-1, 2)");
        assert_eq!("(1, 2)".parse::<Interval<i32>>(), Ok(i(1, 2)));
        assert_eq!(" ( 5 ,-3 ) ".parse::<Interval<i32>>(), Ok(i(5, -3)));
        assert_eq!(
            "(1, x)".parse::<Interval<i32>>(),
            Err(ParseError::InvalidBound("x".into()))
        );
        assert!("1, 2".parse::<Interval<i32>>().is_err());
        assert!("(1 2)".parse::<Interval<i32>>().is_err());
        assert!("(1, 256)".parse::<Interval<u8>>().is_err());
    }
}
