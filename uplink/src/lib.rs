// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Guest side of the byteline boundary.
//!
//! A guest owns an [`Arena`]: a fixed-size byte buffer carved up by a bump
//! allocator. The host asks for space with `alloc`, writes bytes into it, and
//! hands the `(address, length)` pair back to the guest. The guest answers by
//! encoding its result into freshly allocated arena space and reporting the
//! length through `result_len`.
//!
//! With the `abi` feature the crate exports those three functions from a
//! single process-wide arena, for use in a Wasm module.

#![no_std]

extern crate alloc;

#[cfg(feature = "abi")]
mod abi;
#[cfg(feature = "abi")]
pub use abi::*;

mod arena;
pub use arena::*;

pub mod boundary;

mod error;
pub use error::*;

mod greeting;
pub use greeting::*;

mod marshal;
pub use marshal::*;

mod types;
pub use types::*;

/// The default size of an arena in bytes.
pub const ARENA_LEN: u32 = 16 * 1024;
