// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::format;
use alloc::string::String;

use crate::{decode, encode, Arena, ArenaError, Region};

/// The runtime a Rust guest introduces itself as.
pub const RUNTIME: &str = "Rust/Wasm";

/// Formats the greeting of `runtime` to `name`.
pub fn greeting(runtime: &str, name: &str) -> String {
    format!("Hello from {runtime}, {name}!")
}

/// Greets the name stored in `input`, writing the greeting into the arena.
///
/// An empty `input` greets the empty name.
pub fn greet(
    arena: &mut Arena,
    runtime: &str,
    input: Region,
) -> Result<Region, ArenaError> {
    let name = decode(arena, input)?;
    encode(arena, &greeting(runtime, &name))
}
