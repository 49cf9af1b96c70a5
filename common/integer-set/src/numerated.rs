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

//! [Numerated] trait definition and implementation for integer types.

use num_traits::{CheckedAdd, One, PrimInt, Unsigned};

/// Numerated type is a totally ordered type with a notion of "next" and
/// "previous" value, and an unsigned type for distances between any two values.
///
/// All operations are checked: stepping out of `Self` bounds gives `None`,
/// values never wrap around.
///
/// Implemented for all integer types:
/// [i8] [u8] [i16] [u16] [i32] [u32] [i64] [u64] [i128] [u128] [isize] [usize].
pub trait Numerated: Copy + Ord + Eq {
    /// Type that describes the distance between two values of `Self`.
    type Distance: PrimInt + Unsigned;

    /// Increments `self`, if `self < other`.
    fn inc_if_lt(self, other: Self) -> Option<Self>;
    /// Decrements `self`, if `self > other`.
    fn dec_if_gt(self, other: Self) -> Option<Self>;
    /// Returns `|self - other|`. Always representable in [`Self::Distance`].
    fn distance(self, other: Self) -> Self::Distance;

    /// Returns `true` if `other <= self + 1`.
    ///
    /// In other words, a range ending at `self` overlaps or directly touches
    /// a range starting at `other`.
    fn reaches(self, other: Self) -> bool {
        match self.inc_if_lt(other) {
            Some(next) => next == other,
            None => true,
        }
    }

    /// Amount of points between `self` and `other`, both included.
    /// Returns `None` if amount does not fit into [`Self::Distance`].
    fn points_between(self, other: Self) -> Option<Self::Distance> {
        self.distance(other).checked_add(&Self::Distance::one())
    }
}

macro_rules! impl_numerated {
    ($($t:ty => $d:ty),* $(,)?) => {
        $(
            impl Numerated for $t {
                type Distance = $d;

                fn inc_if_lt(self, other: Self) -> Option<Self> {
                    // `self < other <= MAX`, so cannot overflow.
                    (self < other).then(|| self + 1)
                }
                fn dec_if_gt(self, other: Self) -> Option<Self> {
                    (self > other).then(|| self - 1)
                }
                fn distance(self, other: Self) -> $d {
                    self.abs_diff(other)
                }
            }
        )*
    };
}

impl_numerated!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
);
