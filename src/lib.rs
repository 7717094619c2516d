// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Host side of the byteline boundary.
//!
//! A [`Guest`] exports `alloc`, `greet` and `result_len`, and keeps a bump
//! arena in its memory through which all data is exchanged. A [`Session`]
//! drives the exchange. Guests are either Wasm modules ([`WasmGuest`]) or
//! arenas living in the host process ([`NativeGuest`]).

mod error;
mod guest;
mod imports;
mod instance;
mod memory;
mod native;
mod session;

pub use error::Error;
pub use guest::Guest;
pub use instance::WasmGuest;
pub use native::{NativeGuest, NATIVE_BASE};
pub use session::Session;

// re-exports

pub use byteline_uplink::{
    Address, ArenaConfig, ArenaError, Overflow, Region, ARENA_LEN, RUNTIME,
};

/// Instantiates one of the workspace's guest modules, once it has been
/// built with `make modules`.
///
/// `module!(debug "name")` picks the build with the guest's debug channel
/// enabled instead, made by `make modules-debug`.
#[macro_export]
macro_rules! module {
    (debug $name:literal) => {
        $crate::WasmGuest::new(include_bytes!(concat!(
            "../target/debug-modules/wasm32-unknown-unknown/release/",
            $name,
            ".wasm"
        )))
    };
    ($name:literal) => {
        $crate::WasmGuest::new(include_bytes!(concat!(
            "../target/wasm32-unknown-unknown/release/",
            $name,
            ".wasm"
        )))
    };
}
