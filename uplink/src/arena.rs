// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt::{self, Debug, Formatter};
use core::ops::Range;

use crate::{Address, ArenaError, Region, ARENA_LEN};

/// What the allocator does with a request that does not fit behind the
/// cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Move the cursor back to the start of the arena and allocate there.
    /// Regions handed out before the wrap may be overwritten afterwards, and
    /// nobody is told. Requests larger than the whole arena are still refused
    /// with [`ArenaError::OutOfCapacity`].
    #[default]
    Wrap,
    /// Refuse the allocation with [`ArenaError::OutOfCapacity`].
    Fail,
}

/// Configuration of an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the buffer in bytes. Fixed for the lifetime of the arena.
    pub capacity: u32,
    /// Address reported for the first byte of the buffer. `None` uses the
    /// location of the buffer itself, which is only meaningful in a 32-bit
    /// address space such as a Wasm guest's linear memory.
    pub base: Option<u32>,
    pub overflow: Overflow,
}

impl ArenaConfig {
    pub const fn new(capacity: u32) -> Self {
        ArenaConfig {
            capacity,
            base: None,
            overflow: Overflow::Wrap,
        }
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig::new(ARENA_LEN)
    }
}

/// A fixed-size buffer handed out in pieces by a bump allocator.
///
/// Allocations are never freed individually. The only way space is ever
/// reused is by the cursor wrapping back to the start, see [`Overflow`].
pub struct Arena {
    buf: Box<[u8]>,
    base: u32,
    cursor: u32,
    last_len: u32,
    overflow: Overflow,
    wraps: u64,
}

impl Arena {
    /// Creates a zeroed arena according to the given `config`.
    ///
    /// Every byte of the arena must be addressable with a non-null 32-bit
    /// address, otherwise [`ArenaError::Unaddressable`] is returned.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        if config.capacity == 0 {
            return Err(ArenaError::ZeroCapacity);
        }

        let buf = vec![0u8; config.capacity as usize].into_boxed_slice();

        let base = match config.base {
            Some(base) => u64::from(base),
            None => buf.as_ptr() as usize as u64,
        };

        let unaddressable = ArenaError::Unaddressable {
            base,
            capacity: config.capacity,
        };

        let end = base
            .checked_add(u64::from(config.capacity))
            .ok_or(unaddressable)?;
        if base == 0 || end > u64::from(u32::MAX) {
            return Err(unaddressable);
        }

        Ok(Arena {
            buf,
            base: base as u32,
            cursor: 0,
            last_len: 0,
            overflow: config.overflow,
            wraps: 0,
        })
    }

    /// Allocates `size` bytes, returning the region they occupy.
    ///
    /// A request for zero bytes returns [`Region::NULL`] and leaves the arena
    /// untouched. Requests larger than the whole arena are refused.
    ///
    /// With [`Overflow::Wrap`], a request for which `cursor + size` reaches
    /// the capacity moves the cursor back to the start first. With
    /// [`Overflow::Fail`], a request that does not fit behind the cursor is
    /// refused instead.
    pub fn alloc(&mut self, size: u32) -> Result<Region, ArenaError> {
        if size == 0 {
            return Ok(Region::NULL);
        }

        let capacity = self.capacity();
        if size > capacity {
            return Err(ArenaError::OutOfCapacity {
                requested: u64::from(size),
                available: capacity,
            });
        }

        let end = u64::from(self.cursor) + u64::from(size);

        match self.overflow {
            Overflow::Wrap => {
                if end >= u64::from(capacity) && self.cursor != 0 {
                    self.cursor = 0;
                    self.wraps += 1;
                }
            }
            Overflow::Fail => {
                if end > u64::from(capacity) {
                    return Err(ArenaError::OutOfCapacity {
                        requested: u64::from(size),
                        available: self.remaining(),
                    });
                }
            }
        }

        let addr = Address::new(self.base + self.cursor);
        self.cursor += size;

        Ok(Region::new(addr, size))
    }

    /// The bytes of the given `region`.
    ///
    /// An empty region yields an empty slice without being checked against
    /// the arena.
    pub fn bytes(&self, region: Region) -> Result<&[u8], ArenaError> {
        if region.is_empty() {
            return Ok(&[]);
        }
        let range = self.range(region)?;
        Ok(&self.buf[range])
    }

    /// The bytes of the given `region`, mutably.
    pub fn bytes_mut(
        &mut self,
        region: Region,
    ) -> Result<&mut [u8], ArenaError> {
        if region.is_empty() {
            return Ok(&mut []);
        }
        let range = self.range(region)?;
        Ok(&mut self.buf[range])
    }

    /// Copies `bytes` into the arena starting at `addr`.
    ///
    /// This is the memory write a host performs between `alloc` and handing
    /// the address back to the guest.
    pub fn write(
        &mut self,
        addr: Address,
        bytes: &[u8],
    ) -> Result<(), ArenaError> {
        let len = u32::try_from(bytes.len())
            .map_err(|_| ArenaError::OutOfBounds { addr, len: u32::MAX })?;
        self.bytes_mut(Region::new(addr, len))?
            .copy_from_slice(bytes);
        Ok(())
    }

    /// Returns true if `addr` points inside the arena.
    pub fn contains(&self, addr: Address) -> bool {
        let addr = addr.get();
        addr >= self.base && addr - self.base < self.capacity()
    }

    pub fn capacity(&self) -> u32 {
        self.buf.len() as u32
    }

    /// The address of the first byte of the arena.
    pub fn base(&self) -> Address {
        Address::new(self.base)
    }

    /// Offset of the next free byte.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Bytes left behind the cursor before the arena has to wrap.
    pub fn remaining(&self) -> u32 {
        self.capacity() - self.cursor
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// The number of times the cursor has wrapped back to the start.
    pub fn wraps(&self) -> u64 {
        self.wraps
    }

    /// The byte length of the most recent [`encode`].
    ///
    /// [`encode`]: crate::encode
    pub fn last_len(&self) -> u32 {
        self.last_len
    }

    pub(crate) fn set_last_len(&mut self, len: u32) {
        self.last_len = len;
    }

    /// The whole buffer, for inspection.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    fn range(&self, region: Region) -> Result<Range<usize>, ArenaError> {
        let out_of_bounds = ArenaError::OutOfBounds {
            addr: region.addr(),
            len: region.len(),
        };

        let start = region
            .addr()
            .get()
            .checked_sub(self.base)
            .ok_or(out_of_bounds)?;
        // the region starts at or after the base, and so does its end
        let end = region.end().ok_or(out_of_bounds)? - self.base;

        if end > self.capacity() {
            return Err(out_of_bounds);
        }

        Ok(start as usize..end as usize)
    }
}

impl Debug for Arena {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("base", &self.base())
            .field("capacity", &self.capacity())
            .field("cursor", &self.cursor)
            .field("last_len", &self.last_len)
            .field("overflow", &self.overflow)
            .field("wraps", &self.wraps)
            .finish()
    }
}
