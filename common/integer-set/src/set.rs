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

//! [`IntegerSet`] implementation.

use crate::{
    error::{KeyNotFound, ParseError},
    interval::Interval,
    iterators::{DifferenceIterator, Points, VoidsIterator},
    numerated::Numerated,
};
use num_traits::{CheckedAdd, Zero};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    iter::Copied,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, RangeInclusive, Sub,
        SubAssign,
    },
    slice,
    str::FromStr,
};

type IntervalsIter<'a, T> = Copied<slice::Iter<'a, Interval<T>>>;

/// # Set of integers stored as closed intervals
/// Can be considered as set of points, but each continuous run of points
/// is stored as one interval, so sets like `[0..=1_000_000]` cost as much
/// as a set with one point.
///
/// Intervals are kept in canonical form: each one is increasing, they are
/// sorted by start, and between any two of them there is at least one point
/// which is not in the set. Canonical form is restored after each mutation,
/// so two sets with the same points are always equal and have the same hash.
///
/// Operations come in pairs: pure one takes `&self` and returns a new set,
/// in-place one takes `&mut self`, changes it and returns it back for chaining.
/// Operands are never changed.
///
/// # Examples
/// ```
/// use integer_set::{IntegerSet, KeyNotFound};
///
/// let a = IntegerSet::from([(0, 10), (20, 30), (40, 50)]);
/// let b = IntegerSet::from([(10, 20), (30, 40)]);
/// assert_eq!(&a | &b, IntegerSet::from([(0, 50)]));
///
/// let c = IntegerSet::from([(-10, 2), (8, 42)]);
/// assert_eq!(a.intersection([&c]), IntegerSet::from([(0, 2), (8, 10), (20, 30), (40, 42)]));
///
/// let mut d = IntegerSet::from([(0, 10)]);
/// d.difference_update([&IntegerSet::from([(-5, 2), (4, 6), (8, 15)])]);
/// assert_eq!(d.to_string(), "IntegerSet((3, 3), (7, 7))");
/// assert_eq!(d.remove(4), Err(KeyNotFound::Absent));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntegerSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntegerSet<T> {
    /// Creates new empty set.
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Canonical intervals of the set.
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns amount of intervals in canonical form.
    pub fn intervals_amount(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no points.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }
}

impl<T> Default for IntegerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numerated> IntegerSet<T> {
    /// Restores canonical form: sorts intervals and merges each overlapping
    /// or touching pair. Expects all intervals to be increasing already.
    fn consolidate(&mut self) {
        let raw = self.intervals.len();

        self.intervals
            .sort_unstable_by_key(|interval| (interval.start(), interval.end()));

        let mut merged: Vec<Interval<T>> = Vec::with_capacity(raw);
        for next in self.intervals.drain(..) {
            debug_assert!(next.is_increasing(), "Must be normalized on ingestion");
            match merged.last_mut() {
                Some(running) if running.end().reaches(next.start()) => {
                    if running.end() < next.end() {
                        *running = Interval::new(running.start(), next.end());
                    }
                }
                _ => merged.push(next),
            }
        }

        log::trace!("consolidated {raw} intervals into {}", merged.len());
        self.intervals = merged;
    }

    /// Index of interval which contains `point`.
    fn position(&self, point: T) -> Option<usize> {
        let idx = self
            .intervals
            .partition_point(|interval| interval.end() < point);
        self.intervals
            .get(idx)
            .is_some_and(|interval| interval.start() <= point)
            .then_some(idx)
    }

    /// Returns the smallest point in the set.
    pub fn first(&self) -> Option<T> {
        self.intervals.first().map(Interval::start)
    }

    /// Returns the biggest point in the set.
    pub fn last(&self) -> Option<T> {
        self.intervals.last().map(Interval::end)
    }

    /// Number of points in the set.
    /// Returns `None` if it does not fit into `T::Distance`.
    ///
    /// Complexity: `O(n)`, where `n` is amount of intervals in `self`.
    pub fn len(&self) -> Option<T::Distance> {
        self.intervals
            .iter()
            .try_fold(T::Distance::zero(), |acc, interval| {
                acc.checked_add(&interval.len()?)
            })
    }

    /// Returns iterator over all points in ascending order.
    pub fn iter(&self) -> Points<'_, T> {
        Points {
            intervals: self.intervals.iter().copied(),
            current: None,
        }
    }

    /// Convert set to vector of inclusive ranges.
    pub fn to_vec(&self) -> Vec<RangeInclusive<T>> {
        self.intervals.iter().copied().map(Into::into).collect()
    }

    /// Returns `true` if `point` is in the set.
    ///
    /// Complexity: `O(log(n))`, where `n` is amount of intervals in `self`.
    pub fn contains(&self, point: T) -> bool {
        self.position(point).is_some()
    }

    /// Inserts all points of `interval`, in any orientation.
    pub fn insert(&mut self, interval: Interval<T>) {
        self.intervals.push(interval.normalized());
        self.consolidate();
    }

    /// Inserts one point.
    pub fn add(&mut self, point: T) {
        self.insert(Interval::from(point));
    }

    /// Removes `point` from the set, splitting its interval if needed.
    ///
    /// Fails with [`KeyNotFound::Absent`] if there is no such point,
    /// then set stays untouched.
    pub fn remove(&mut self, point: T) -> Result<(), KeyNotFound> {
        let Some(idx) = self.position(point) else {
            log::debug!("remove: point is absent, {} intervals", self.intervals.len());
            return Err(KeyNotFound::Absent);
        };

        // Both parts keep at least one missing point between them and
        // their neighbors, so the list stays canonical.
        let interval = self.intervals[idx];
        let left = point
            .dec_if_gt(interval.start())
            .map(|end| Interval::new(interval.start(), end));
        let right = point
            .inc_if_lt(interval.end())
            .map(|start| Interval::new(start, interval.end()));
        self.intervals.splice(idx..=idx, left.into_iter().chain(right));

        log::trace!("removed point from interval #{idx}");
        Ok(())
    }

    /// Removes `point` if it is in the set.
    /// Returns whether the point was removed.
    pub fn discard(&mut self, point: T) -> bool {
        self.remove(point).is_ok()
    }

    /// Removes and returns some point of the set: the smallest one.
    ///
    /// Fails with [`KeyNotFound::Empty`] if the set is empty.
    pub fn pop(&mut self) -> Result<T, KeyNotFound> {
        let first = self.intervals.first().copied().ok_or(KeyNotFound::Empty)?;
        let point = first.start();

        match point.inc_if_lt(first.end()) {
            Some(start) => self.intervals[0] = Interval::new(start, first.end()),
            None => {
                self.intervals.remove(0);
            }
        }

        log::trace!("popped point, {} intervals left", self.intervals.len());
        Ok(point)
    }

    /// Returns iterator over intervals, which consist of points `p`,
    /// where each `p` ∈ `self` and `p` ∉ `other`.
    ///
    /// Iterating complexity: `O(n + m)`, where
    /// - `n` is amount of intervals in `self`
    /// - `m` is amount of intervals in `other`
    pub fn difference_iter<'a>(
        &'a self,
        other: &'a Self,
    ) -> DifferenceIterator<T, IntervalsIter<'a, T>> {
        DifferenceIterator::new(self.intervals.iter().copied(), other.intervals.iter().copied())
    }

    /// Returns iterator over voids: maximal increasing intervals of points
    /// which are in `within`, but not in the set. Sorted in ascending order.
    ///
    /// Iterating complexity: `O(log(n) + m)`, where
    /// - `n` is amount of intervals in `self`
    /// - `m` is amount of intervals in `self` ⋂ `within`
    pub fn voids(&self, within: Interval<T>) -> VoidsIterator<T, IntervalsIter<'_, T>> {
        let within = within.normalized();
        let skip = self
            .intervals
            .partition_point(|interval| interval.end() < within.start());

        VoidsIterator {
            iter: self.intervals[skip..].iter().copied(),
            rest: Some(within),
        }
    }

    /// Adds all points of each set from `others`.
    pub fn update<'a, I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        for other in others {
            self.intervals.extend_from_slice(&other.intervals);
        }
        self.consolidate();
        self
    }

    /// Keeps only points which are in each set from `others`.
    pub fn intersection_update<'a, I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        for other in others {
            self.intervals = intersect(&self.intervals, &other.intervals);
        }
        self.consolidate();
        self
    }

    /// Removes all points of each set from `others`.
    pub fn difference_update<'a, I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        for other in others {
            self.intervals = self.difference_iter(other).collect();
        }
        self.consolidate();
        self
    }

    /// Keeps points which are in exactly one of `self` and `other`.
    pub fn symmetric_difference_update(&mut self, other: &Self) -> &mut Self {
        let mut intervals: Vec<_> = self.difference_iter(other).collect();
        intervals.extend(other.difference_iter(self));
        self.intervals = intervals;
        self.consolidate();
        self
    }

    /// Returns new set with points of `self` and of each set from `others`.
    pub fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut res = self.clone();
        res.update(others);
        res
    }

    /// Returns new set with points common for `self` and each set from `others`.
    pub fn intersection<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut res = self.clone();
        res.intersection_update(others);
        res
    }

    /// Returns new set with points of `self`, which are in none of `others`.
    pub fn difference<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut res = self.clone();
        res.difference_update(others);
        res
    }

    /// Returns new set with points which are in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut res = self.clone();
        res.symmetric_difference_update(other);
        res
    }

    /// Returns `true` if sets have no common points.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.intervals.get(i), other.intervals.get(j)) {
            if !a.is_disjoint(b) {
                return false;
            }
            if a.end() < b.end() {
                i += 1;
            } else {
                j += 1;
            }
        }
        true
    }

    /// Returns `true` if each point of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.difference_iter(other).next().is_none()
    }

    /// Returns `true` if `self` is subset of `other`, and `other` has more points.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self != other && self.is_subset(other)
    }

    /// Returns `true` if each point of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is superset of `other`, and has more points.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }
}

/// Intersection of two canonical interval lists.
fn intersect<T: Numerated>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut res = Vec::new();
    let (mut i, mut j) = (0, 0);
    while let (Some(x), Some(y)) = (a.get(i), b.get(j)) {
        if let Ok(common) = x.intersection(y) {
            res.push(common);
        }
        // Interval which ends first cannot intersect anything else from the other list.
        if x.end() < y.end() {
            i += 1;
        } else {
            j += 1;
        }
    }
    res
}

/// Subset partial order: `a <= b` iff `a` is subset of `b`.
/// Sets where neither is subset of the other are incomparable.
impl<T: Numerated> PartialOrd for IntegerSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset(other) {
            Some(Ordering::Less)
        } else if other.is_subset(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: Numerated> FromIterator<Interval<T>> for IntegerSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self {
            intervals: iter.into_iter().map(Interval::normalized).collect(),
        };
        set.consolidate();
        set
    }
}

impl<T: Numerated> FromIterator<(T, T)> for IntegerSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        iter.into_iter().map(Interval::from).collect()
    }
}

impl<T: Numerated, const N: usize> From<[(T, T); N]> for IntegerSet<T> {
    fn from(bounds: [(T, T); N]) -> Self {
        bounds.into_iter().collect()
    }
}

impl<T: Numerated> From<Interval<T>> for IntegerSet<T> {
    fn from(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval.normalized()],
        }
    }
}

impl<T: Numerated> Extend<T> for IntegerSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, points: I) {
        self.intervals
            .extend(points.into_iter().map(Interval::from));
        self.consolidate();
    }
}

impl<'a, T: Numerated> IntoIterator for &'a IntegerSet<T> {
    type Item = T;
    type IntoIter = Points<'a, T>;

    fn into_iter(self) -> Points<'a, T> {
        self.iter()
    }
}

macro_rules! impl_set_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $pure:ident, $update:ident) => {
        impl<T: Numerated> $op<&IntegerSet<T>> for &IntegerSet<T> {
            type Output = IntegerSet<T>;

            fn $method(self, rhs: &IntegerSet<T>) -> IntegerSet<T> {
                self.$pure(rhs)
            }
        }

        impl<T: Numerated> $assign_op<&IntegerSet<T>> for IntegerSet<T> {
            fn $assign_method(&mut self, rhs: &IntegerSet<T>) {
                self.$update(rhs);
            }
        }
    };
}

// Binary forms of variadic operations, to be used by operators.
impl<T: Numerated> IntegerSet<T> {
    fn union_one(&self, other: &Self) -> Self {
        self.union([other])
    }

    fn intersection_one(&self, other: &Self) -> Self {
        self.intersection([other])
    }

    fn difference_one(&self, other: &Self) -> Self {
        self.difference([other])
    }

    fn update_one(&mut self, other: &Self) {
        self.update([other]);
    }

    fn intersection_update_one(&mut self, other: &Self) {
        self.intersection_update([other]);
    }

    fn difference_update_one(&mut self, other: &Self) {
        self.difference_update([other]);
    }
}

impl_set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union_one, update_one);
impl_set_operator!(
    BitAnd,
    bitand,
    BitAndAssign,
    bitand_assign,
    intersection_one,
    intersection_update_one
);
impl_set_operator!(Sub, sub, SubAssign, sub_assign, difference_one, difference_update_one);
impl_set_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_update
);

impl<T: Display> Display for IntegerSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("IntegerSet(")?;
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interval}")?;
        }
        f.write_str(")")
    }
}

impl<T: Debug> Debug for IntegerSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("IntegerSet(")?;
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interval:?}")?;
        }
        f.write_str(")")
    }
}

impl<T: Numerated + FromStr> FromStr for IntegerSet<T> {
    type Err = ParseError;

    /// Parses the form produced by [`Display`]: `IntegerSet((s0, e0), (s1, e1))`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut rest = s
            .strip_prefix("IntegerSet(")
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| ParseError::unexpected("IntegerSet(...)", s))?
            .trim();

        let mut intervals = Vec::new();
        while !rest.is_empty() {
            let close = rest
                .find(')')
                .ok_or_else(|| ParseError::unexpected(")", rest))?;
            intervals.push(rest[..=close].parse::<Interval<T>>()?);

            rest = rest[close + 1..].trim_start();
            if !rest.is_empty() {
                rest = rest
                    .strip_prefix(',')
                    .ok_or_else(|| ParseError::unexpected(",", rest))?
                    .trim_start();
            }
        }

        Ok(intervals.into_iter().collect())
    }
}
