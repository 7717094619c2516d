// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::Arc;

use parking_lot::Mutex;
use wasmer::{
    imports, Function, ImportObject, LazyInit, Memory, Store, WasmerEnv,
};

use crate::memory;

/// Debug messages reported by a guest, oldest first.
pub(crate) type DebugLog = Arc<Mutex<Vec<String>>>;

#[derive(WasmerEnv, Clone)]
pub(crate) struct DebugEnv {
    #[wasmer(export)]
    memory: LazyInit<Memory>,
    log: DebugLog,
}

/// The functions a guest may import from the host.
pub(crate) fn for_guest(store: &Store, log: DebugLog) -> ImportObject {
    let env = DebugEnv {
        memory: LazyInit::new(),
        log,
    };

    let host_debug = Function::new_native_with_env(store, env, host_debug);

    imports! {
        "env" => {
            "host_debug" => host_debug,
        }
    }
}

fn host_debug(env: &DebugEnv, ofs: i32, len: i32) {
    let memory = match env.memory_ref() {
        Some(memory) => memory,
        None => {
            tracing::warn!("host_debug called before memory was initialized");
            return;
        }
    };

    let mem = unsafe { memory.data_unchecked() };
    match memory::read(mem, ofs as u32, len as u32) {
        Ok(bytes) => {
            let msg = String::from_utf8_lossy(bytes).into_owned();
            tracing::debug!(target: "byteline::guest", "{msg}");
            env.log.lock().push(msg);
        }
        Err(err) => tracing::warn!(%err, "invalid debug message"),
    }
}
