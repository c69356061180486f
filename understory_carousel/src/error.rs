// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Reasons a pool resize was refused.
///
/// None of these are fatal: the carousel keeps its previous pool, layout and
/// state, and the host may correct the configuration and retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselError {
    /// A resize asked for zero visible slots.
    ZeroVisibleSlots,
    /// The host cannot construct slots (no template configured).
    MissingTemplate,
    /// The data sequence is empty, so there is nothing to bind slots to.
    EmptyData,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVisibleSlots => f.write_str("carousel requires at least 1 visible slot"),
            Self::MissingTemplate => {
                f.write_str("cannot modify slots: host has no slot template")
            }
            Self::EmptyData => f.write_str("cannot lay out slots over an empty data sequence"),
        }
    }
}

impl core::error::Error for CarouselError {}
