// This file is part of Gear.

// Copyright (C) 2026 Gear Technologies Inc.
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

//! Errors of interval arithmetic and set mutation.

/// Mathematical precondition of an interval operation does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DomainError {
    /// Operands have no point in common.
    #[error("intervals do not overlap")]
    Disjoint,
    /// Inclusive range with `start > end` has no points.
    #[error("range is empty")]
    EmptyRange,
}

/// Requested element is not in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum KeyNotFound {
    /// Element to remove is not covered by any interval.
    #[error("element is not a member of the set")]
    Absent,
    /// Pop from a set without elements.
    #[error("pop from an empty set")]
    Empty,
}

/// Text is not a printable form of an interval or a set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected `{expected}` at `{found}`")]
    Unexpected {
        expected: &'static str,
        found: String,
    },
    #[error("invalid bound `{0}`")]
    InvalidBound(String),
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, found: &str) -> Self {
        Self::Unexpected {
            expected,
            found: found.into(),
        }
    }
}
