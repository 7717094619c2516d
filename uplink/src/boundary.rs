// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The arena as the host sees it.
//!
//! Everything crossing the boundary is a `u32`: an address or a byte count.
//! There is no error channel, so every failure comes out as the null address
//! `0`, the same value a zero sized allocation returns.

use alloc::string::String;

use crate::{decode, encode, Address, Arena, ArenaError, Region};

/// Allocates `size` bytes, returning their address or `0`.
pub fn alloc(arena: &mut Arena, size: u32) -> u32 {
    to_raw(arena.alloc(size))
}

/// The byte length of the last result written to the arena.
pub fn result_len(arena: &Arena) -> u32 {
    arena.last_len()
}

/// Greets the name at `addr`, returning the address of the greeting or `0`.
pub fn greet(arena: &mut Arena, runtime: &str, addr: u32, len: u32) -> u32 {
    let input = Region::new(Address::new(addr), len);
    to_raw(crate::greet(arena, runtime, input))
}

/// Runs `f` over the text at `addr`, writing its result back into the arena
/// and returning the address of the result or `0`.
pub fn call<F>(arena: &mut Arena, addr: u32, len: u32, f: F) -> u32
where
    F: FnOnce(&str) -> String,
{
    let input = Region::new(Address::new(addr), len);
    let output = decode(arena, input).and_then(|text| encode(arena, &f(&text)));
    to_raw(output)
}

fn to_raw(region: Result<Region, ArenaError>) -> u32 {
    match region {
        Ok(region) => region.addr().get(),
        Err(_) => Address::NULL.get(),
    }
}
