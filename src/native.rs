// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::borrow::Cow;

use byteline_uplink::{boundary, Address, Arena, ArenaConfig, Region, RUNTIME};

use crate::guest::Guest;
use crate::Error;

/// Address reported for the start of a native guest's arena when the
/// configuration leaves it open. A native guest has no linear memory, so any
/// non-null address will do; this is where the first page of a Wasm memory
/// ends.
pub const NATIVE_BASE: u32 = 0x1_0000;

/// A guest living in the host process.
///
/// It owns its arena and answers boundary calls exactly the way the Wasm ABI
/// of `byteline-uplink` does.
#[derive(Debug)]
pub struct NativeGuest {
    arena: Arena,
    runtime: Cow<'static, str>,
}

impl NativeGuest {
    pub fn new(config: ArenaConfig) -> Result<Self, Error> {
        Self::with_runtime(config, RUNTIME)
    }

    /// Creates a guest that introduces itself as `runtime` when greeting.
    pub fn with_runtime<R>(
        config: ArenaConfig,
        runtime: R,
    ) -> Result<Self, Error>
    where
        R: Into<Cow<'static, str>>,
    {
        let config = match config.base {
            Some(_) => config,
            None => config.with_base(NATIVE_BASE),
        };

        Ok(Self {
            arena: Arena::new(config)?,
            runtime: runtime.into(),
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn runtime(&self) -> &str {
        &self.runtime
    }
}

impl Guest for NativeGuest {
    fn alloc(&mut self, size: u32) -> Result<u32, Error> {
        Ok(boundary::alloc(&mut self.arena, size))
    }

    fn greet(&mut self, addr: u32, len: u32) -> Result<u32, Error> {
        Ok(boundary::greet(&mut self.arena, &self.runtime, addr, len))
    }

    fn result_len(&mut self) -> Result<u32, Error> {
        Ok(boundary::result_len(&self.arena))
    }

    fn write_memory(&mut self, addr: u32, bytes: &[u8]) -> Result<(), Error> {
        self.arena.write(Address::new(addr), bytes)?;
        Ok(())
    }

    fn read_memory(&self, addr: u32, len: u32) -> Result<Vec<u8>, Error> {
        let region = Region::new(Address::new(addr), len);
        Ok(self.arena.bytes(region)?.to_vec())
    }

    fn with_memory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(u32, &[u8]) -> R,
    {
        f(self.arena.base().get(), self.arena.as_bytes())
    }
}
