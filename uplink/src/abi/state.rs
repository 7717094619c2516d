// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::ptr;

use crate::{boundary, Arena, ArenaConfig, ArenaError};

/// The arena of the module. Created on the first boundary call, lives as long
/// as the module instance.
static mut ARENA: Option<Arena> = None;

/// Runs `f` with the module's arena, creating it first if this is the first
/// call.
///
/// Fails only if the arena cannot be created, which happens when the module
/// is not running in a 32-bit address space.
pub fn with_arena<F, R>(f: F) -> Result<R, ArenaError>
where
    F: FnOnce(&mut Arena) -> R,
{
    // SAFETY: a module instance is single threaded and boundary calls do not
    // nest, so there is never more than one reference to the arena.
    let slot = unsafe { &mut *ptr::addr_of_mut!(ARENA) };

    let arena = match slot.take() {
        Some(arena) => arena,
        None => Arena::new(ArenaConfig::default())?,
    };

    Ok(f(slot.insert(arena)))
}

/// Allocates `size` bytes in the module's arena for the host to write into.
#[no_mangle]
pub extern "C" fn alloc(size: u32) -> u32 {
    with_arena(|arena| {
        #[cfg(feature = "debug")]
        let wraps = arena.wraps();

        let addr = boundary::alloc(arena, size);

        #[cfg(feature = "debug")]
        {
            if arena.wraps() != wraps {
                crate::debug!("arena wrapped: {size} bytes at {addr:#x}");
            }
            if addr == 0 && size != 0 {
                crate::debug!("arena refused {size} bytes");
            }
        }

        addr
    })
    .unwrap_or_default()
}

/// The byte length of the last result the module wrote.
#[no_mangle]
pub extern "C" fn result_len() -> u32 {
    with_arena(|arena| boundary::result_len(arena)).unwrap_or_default()
}
