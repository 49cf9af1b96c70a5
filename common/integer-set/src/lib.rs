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

//! Sets of integers stored as closed intervals.
//!
//! - [`Interval`]: closed directed interval `[start, end]`, `start` may be bigger than `end`.
//! - [`IntegerSet`]: canonical sorted list of disjoint, non-touching intervals
//!   with full set algebra over covered points.
//!
//! Both are generic over [`Numerated`], which is implemented for all primitive integers.

mod error;
mod interval;
mod iterators;
mod numerated;
mod set;

#[cfg(test)]
mod mock;

pub use error::{DomainError, KeyNotFound, ParseError};
pub use interval::{Interval, IntervalIter, Pieces};
pub use iterators::{DifferenceIterator, Points, VoidsIterator};
pub use numerated::Numerated;
pub use set::IntegerSet;

pub use num_traits::{self, PrimInt, Unsigned};
