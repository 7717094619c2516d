// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::string::String;

use crate::abi::state::with_arena;
use crate::boundary;

/// Wrap an exported function taking text and returning text.
///
/// Decodes the `len` bytes at `addr` from the module's arena, passes them to
/// `f` and encodes the result back into the arena.
///
/// Returns the address of the result, or `0` if anything failed. The host
/// learns the length of the result by calling `result_len`.
pub fn wrap_call<F>(addr: u32, len: u32, f: F) -> u32
where
    F: FnOnce(&str) -> String,
{
    with_arena(|arena| boundary::call(arena, addr, len, f)).unwrap_or_default()
}
