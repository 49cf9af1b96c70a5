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

//! [`DifferenceIterator`], [`VoidsIterator`], [`Points`] implementations.
//!
//! All iterators here work over canonical interval lists: increasing
//! intervals, sorted by start, without overlaps and without touching.

use crate::{interval::Interval, interval::IntervalIter, numerated::Numerated};
use std::{iter::Copied, slice};

/// Helper struct to iterate over intervals from `set1`, which are not in `set2`.
///
/// See also [`IntegerSet::difference`](crate::IntegerSet::difference).
pub struct DifferenceIterator<T, I> {
    /// Iterator over intervals in `set1`.
    pub(crate) iter1: I,
    /// Iterator over intervals in `set2`.
    pub(crate) iter2: I,
    /// Not yet processed part of current interval from `set1`.
    pub(crate) interval1: Option<Interval<T>>,
    /// Current interval from `set2`.
    pub(crate) interval2: Option<Interval<T>>,
}

impl<T, I> DifferenceIterator<T, I> {
    pub(crate) fn new(iter1: I, iter2: I) -> Self {
        Self {
            iter1,
            iter2,
            interval1: None,
            interval2: None,
        }
    }
}

impl<T: Numerated, I: Iterator<Item = Interval<T>>> Iterator for DifferenceIterator<T, I> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // No intervals left in `set1` - end of iteration.
            self.interval1 = self.interval1.or_else(|| self.iter1.next());
            let interval1 = self.interval1?;

            // No intervals left in `set2`, so the rest of `set1` is returned as is.
            let Some(interval2) = self.interval2.or_else(|| self.iter2.next()) else {
                return self.interval1.take();
            };

            if interval2.end() < interval1.start() {
                // `interval2` lies before `interval1`, take next one from `set2`.
                self.interval2 = None;
                continue;
            }

            self.interval2 = Some(interval2);

            if interval1.end() < interval2.start() {
                // `interval1` lies before `interval2`, so it has no intersections at all.
                self.interval1 = None;
                return Some(interval1);
            }

            // Intervals intersect: keep `(interval2.end, interval1.end]` for the next loop.
            if let Some(rest_start) = interval2.end().inc_if_lt(interval1.end()) {
                self.interval1 = Some(Interval::new(rest_start, interval1.end()));
            } else {
                self.interval1 = None;
                if interval1.end() == interval2.end() {
                    self.interval2 = None;
                }
            }

            // `[interval1.start, interval2.start)` is not covered by `set2`.
            if let Some(head_end) = interval2.start().dec_if_gt(interval1.start()) {
                return Some(Interval::new(interval1.start(), head_end));
            }
        }
    }
}

/// Helper struct to iterate over voids (maximal uncovered intervals)
/// inside of some bounding interval.
///
/// See also [`IntegerSet::voids`](crate::IntegerSet::voids).
pub struct VoidsIterator<T, I> {
    /// Iterator over set intervals.
    pub(crate) iter: I,
    /// Part of bounding interval which is not processed yet.
    pub(crate) rest: Option<Interval<T>>,
}

impl<T: Numerated, I: Iterator<Item = Interval<T>>> Iterator for VoidsIterator<T, I> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.rest?;

            let Some(next) = self.iter.next() else {
                self.rest = None;
                return Some(rest);
            };

            if next.end() < rest.start() {
                continue;
            }

            if rest.end() < next.start() {
                self.rest = None;
                return Some(rest);
            }

            self.rest = next
                .end()
                .inc_if_lt(rest.end())
                .map(|start| Interval::new(start, rest.end()));

            if let Some(void_end) = next.start().dec_if_gt(rest.start()) {
                return Some(Interval::new(rest.start(), void_end));
            }
        }
    }
}

/// Iterator over all points of [`IntegerSet`](crate::IntegerSet) in ascending order.
#[derive(Clone)]
pub struct Points<'a, T> {
    pub(crate) intervals: Copied<slice::Iter<'a, Interval<T>>>,
    pub(crate) current: Option<IntervalIter<T>>,
}

impl<T: Numerated> Iterator for Points<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(point) = self.current.as_mut().and_then(Iterator::next) {
                return Some(point);
            }
            self.current = Some(self.intervals.next()?.iter());
        }
    }
}
