// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt::{Display, Formatter};

use crate::Address;

/// The error possibly returned by arena operations.
//
// None of these ever cross the boundary. The boundary functions collapse
// every error into the null address, so the host only ever sees a `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    /// An arena was configured with a capacity of zero bytes.
    ZeroCapacity,
    /// The arena cannot be addressed with 32-bit addresses, or would start at
    /// the null address.
    Unaddressable { base: u64, capacity: u32 },
    /// An allocation did not fit.
    OutOfCapacity { requested: u64, available: u32 },
    /// An access reached outside the arena.
    OutOfBounds { addr: Address, len: u32 },
}

impl Display for ArenaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ArenaError::ZeroCapacity => write!(f, "ZERO CAPACITY"),
            ArenaError::Unaddressable { base, capacity } => {
                write!(f, "UNADDRESSABLE: base {base:#x}, capacity {capacity}")
            }
            ArenaError::OutOfCapacity {
                requested,
                available,
            } => write!(
                f,
                "OUT OF CAPACITY: requested {requested}, available {available}"
            ),
            ArenaError::OutOfBounds { addr, len } => {
                write!(f, "OUT OF BOUNDS: address {addr}, length {len}")
            }
        }
    }
}
