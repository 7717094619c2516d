// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Module that greets whoever the host names.
//!
//! Besides `greet`, the module exports `alloc` and `result_len` through
//! `byteline-uplink`.

#![cfg_attr(target_arch = "wasm32", no_std)]

extern crate alloc;

use alloc::string::String;

use byteline_uplink as uplink;

/// Greet the name stored at `addr`.
#[no_mangle]
pub extern "C" fn greet(addr: u32, len: u32) -> u32 {
    uplink::wrap_call(addr, len, greeting)
}

fn greeting(name: &str) -> String {
    uplink::greeting(uplink::RUNTIME, name)
}
