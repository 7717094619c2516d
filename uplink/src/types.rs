// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt::{self, Debug, Display, Formatter};

/// An address in the guest's memory, as it crosses the boundary.
///
/// Address `0` is the null address. It is what the boundary returns when
/// there is nothing to point at, such as a zero sized allocation.
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(transparent)]
pub struct Address(u32);

impl Address {
    /// The null address.
    pub const NULL: Self = Address(0);

    pub const fn new(addr: u32) -> Self {
        Address(addr)
    }

    /// The raw value passed across the boundary.
    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Address {
    fn from(addr: u32) -> Self {
        Address(addr)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#010x})", self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A byte range in guest memory: an address together with the number of
/// bytes that may be read starting there.
///
/// Regions are handed out by [`Arena::alloc`] and redeemed against the same
/// arena through [`Arena::bytes`] and [`Arena::bytes_mut`].
///
/// [`Arena::alloc`]: crate::Arena::alloc
/// [`Arena::bytes`]: crate::Arena::bytes
/// [`Arena::bytes_mut`]: crate::Arena::bytes_mut
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Region {
    addr: Address,
    len: u32,
}

impl Region {
    /// The empty region at the null address.
    pub const NULL: Self = Region {
        addr: Address::NULL,
        len: 0,
    };

    pub const fn new(addr: Address, len: u32) -> Self {
        Region { addr, len }
    }

    pub const fn addr(&self) -> Address {
        self.addr
    }

    pub const fn len(&self) -> u32 {
        self.len
    }

    /// A region is empty when it has no bytes or points at the null address.
    /// Reading an empty region never touches memory.
    pub const fn is_empty(&self) -> bool {
        self.addr.is_null() || self.len == 0
    }

    /// One past the last address of the region, if it fits in 32 bits.
    pub fn end(&self) -> Option<u32> {
        self.addr.get().checked_add(self.len)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.addr, self.len)
    }
}
