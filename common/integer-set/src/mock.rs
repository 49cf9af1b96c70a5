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

//! Model checking helpers: [`IntegerSet`] against [`BTreeSet`] of points.

use crate::{IntegerSet, Interval, KeyNotFound, Numerated};
use std::{collections::BTreeSet, fmt::Debug};

pub fn points_of<T: Numerated>(bounds: &[(T, T)]) -> BTreeSet<T> {
    bounds
        .iter()
        .flat_map(|&bounds| Interval::from(bounds).iter())
        .collect()
}

pub fn set_of<T: Numerated>(bounds: &[(T, T)]) -> IntegerSet<T> {
    bounds.iter().copied().collect()
}

pub fn assert_canonical<T: Numerated + Debug>(set: &IntegerSet<T>) {
    for interval in set.intervals() {
        assert!(interval.is_increasing(), "{interval:?} is not increasing");
    }
    for pair in set.intervals().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            !a.end().reaches(b.start()),
            "{a:?} and {b:?} are not sorted or overlap or touch"
        );
    }
}

pub fn assert_same_points<T: Numerated + Debug>(set: &IntegerSet<T>, expected: &BTreeSet<T>) {
    assert_canonical(set);
    assert_eq!(&set.iter().collect::<BTreeSet<_>>(), expected);
    assert_eq!(set.first(), expected.first().copied());
    assert_eq!(set.last(), expected.last().copied());
    assert_eq!(set.is_empty(), expected.is_empty());
}

#[derive(Debug, Clone)]
pub enum SetAction<T> {
    Insert(Interval<T>),
    Add(T),
    Remove(T),
    Discard(T),
    Pop,
    Union(Vec<(T, T)>),
    Intersection(Vec<(T, T)>),
    Difference(Vec<(T, T)>),
    SymmetricDifference(Vec<(T, T)>),
    Voids(Interval<T>),
}

pub fn test_set<T: Numerated + Debug>(initial: Vec<(T, T)>, actions: Vec<SetAction<T>>) {
    let mut set = set_of(&initial);
    let mut expected = points_of(&initial);
    assert_same_points(&set, &expected);

    for action in actions {
        log::debug!("{action:?}");
        match action {
            SetAction::Insert(interval) => {
                set.insert(interval);
                expected.extend(interval);
            }
            SetAction::Add(point) => {
                set.add(point);
                expected.insert(point);
            }
            SetAction::Remove(point) => {
                let res = set.remove(point);
                if expected.remove(&point) {
                    assert_eq!(res, Ok(()));
                } else {
                    assert_eq!(res, Err(KeyNotFound::Absent));
                }
            }
            SetAction::Discard(point) => {
                assert_eq!(set.discard(point), expected.remove(&point));
            }
            SetAction::Pop => match set.pop() {
                Ok(point) => assert!(expected.remove(&point)),
                Err(err) => {
                    assert_eq!(err, KeyNotFound::Empty);
                    assert!(expected.is_empty());
                }
            },
            SetAction::Union(bounds) => {
                set |= &set_of(&bounds);
                expected.extend(points_of(&bounds));
            }
            SetAction::Intersection(bounds) => {
                set &= &set_of(&bounds);
                expected = expected.intersection(&points_of(&bounds)).copied().collect();
            }
            SetAction::Difference(bounds) => {
                set -= &set_of(&bounds);
                expected = expected.difference(&points_of(&bounds)).copied().collect();
            }
            SetAction::SymmetricDifference(bounds) => {
                set ^= &set_of(&bounds);
                expected = expected
                    .symmetric_difference(&points_of(&bounds))
                    .copied()
                    .collect();
            }
            SetAction::Voids(within) => {
                let voids: BTreeSet<T> = set.voids(within).flat_map(|i| i.iter()).collect();
                let model: BTreeSet<T> = within.iter().filter(|p| !expected.contains(p)).collect();
                assert_eq!(voids, model);
            }
        }
        log::trace!("{set:?}");
        assert_same_points(&set, &expected);
    }
}
