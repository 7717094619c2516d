// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#[cfg(all(feature = "dlmalloc", target_arch = "wasm32"))]
mod allocator;

#[cfg(all(target_arch = "wasm32", not(test)))]
mod handlers;

mod helpers;
pub use helpers::*;

mod state;
pub use state::with_arena;

#[cfg(feature = "debug")]
pub mod debug;
