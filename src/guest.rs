// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::Error;

/// A guest reachable across the boundary.
///
/// The first three methods are the functions a guest exports. They only ever
/// take and return addresses and byte counts, and report failure by
/// returning the null address `0`. The `Err` case is reserved for the
/// transport itself failing, such as a trap in a Wasm instance.
///
/// The remaining methods are the host's view of the guest's memory.
pub trait Guest {
    /// Asks the guest for `size` bytes of memory.
    fn alloc(&mut self, size: u32) -> Result<u32, Error>;

    /// Asks the guest to greet the name stored in the `len` bytes at `addr`.
    fn greet(&mut self, addr: u32, len: u32) -> Result<u32, Error>;

    /// The byte length of the last result the guest wrote.
    fn result_len(&mut self) -> Result<u32, Error>;

    /// Copies `bytes` into guest memory at `addr`.
    fn write_memory(&mut self, addr: u32, bytes: &[u8]) -> Result<(), Error>;

    /// Copies `len` bytes at `addr` out of guest memory.
    fn read_memory(&self, addr: u32, len: u32) -> Result<Vec<u8>, Error>;

    /// Calls `f` with the guest memory and the address of its first byte.
    fn with_memory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(u32, &[u8]) -> R;

    /// Debug messages the guest reported since the last call.
    fn take_debug(&mut self) -> Vec<String> {
        Vec::new()
    }
}
