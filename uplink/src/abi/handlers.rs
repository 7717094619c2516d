// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::panic::PanicInfo;

#[panic_handler]
fn handle_panic(info: &PanicInfo) -> ! {
    #[cfg(feature = "debug")]
    {
        crate::debug!("{info}");
    }
    let _ = info;
    core::arch::wasm32::unreachable()
}
