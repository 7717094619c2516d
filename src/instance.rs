// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::mem;

use wasmer::{Instance, Memory, Module, NativeFunc, Store};

use crate::guest::Guest;
use crate::imports::{self, DebugLog};
use crate::{memory, Error};

/// A guest running as a Wasm module instance.
///
/// The module must export its memory as `memory`, and the functions
///
/// - `alloc: i32 -> i32`
/// - `result_len: () -> i32`
/// - `greet: (i32, i32) -> i32`
///
/// It may import `env.host_debug: (i32, i32) -> ()` to report debug
/// messages, which are logged and collected by the host.
pub struct WasmGuest {
    // keeps the exports below alive
    #[allow(dead_code)]
    instance: Instance,
    memory: Memory,
    alloc: NativeFunc<i32, i32>,
    greet: NativeFunc<(i32, i32), i32>,
    result_len: NativeFunc<(), i32>,
    debug: DebugLog,
}

impl WasmGuest {
    /// Compiles and instantiates the given module. Both the binary and the
    /// text format are accepted.
    pub fn new<B: AsRef<[u8]>>(bytecode: B) -> Result<Self, Error> {
        let store = Store::default();
        let module = Module::new(&store, bytecode)?;

        let debug = DebugLog::default();
        let imports = imports::for_guest(&store, debug.clone());

        let instance = Instance::new(&module, &imports)?;

        let exports = &instance.exports;
        let memory = exports.get_memory("memory")?.clone();
        let alloc = exports.get_native_function("alloc")?;
        let greet = exports.get_native_function("greet")?;
        let result_len = exports.get_native_function("result_len")?;

        tracing::debug!(
            pages = memory.size().0,
            "instantiated guest module"
        );

        Ok(Self {
            instance,
            memory,
            alloc,
            greet,
            result_len,
            debug,
        })
    }

    /// Debug messages the guest reported and that were not taken yet.
    pub fn debug_log(&self) -> Vec<String> {
        self.debug.lock().clone()
    }

    /// The current size of the guest memory in bytes.
    pub fn mem_len(&self) -> usize {
        self.memory.data_size() as usize
    }
}

impl Guest for WasmGuest {
    fn alloc(&mut self, size: u32) -> Result<u32, Error> {
        Ok(self.alloc.call(size as i32)? as u32)
    }

    fn greet(&mut self, addr: u32, len: u32) -> Result<u32, Error> {
        Ok(self.greet.call(addr as i32, len as i32)? as u32)
    }

    fn result_len(&mut self) -> Result<u32, Error> {
        Ok(self.result_len.call()? as u32)
    }

    fn write_memory(&mut self, addr: u32, bytes: &[u8]) -> Result<(), Error> {
        let mem = unsafe { self.memory.data_unchecked_mut() };
        memory::write(mem, addr, bytes)
    }

    fn read_memory(&self, addr: u32, len: u32) -> Result<Vec<u8>, Error> {
        let mem = unsafe { self.memory.data_unchecked() };
        memory::read(mem, addr, len).map(<[u8]>::to_vec)
    }

    fn with_memory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(u32, &[u8]) -> R,
    {
        f(0, unsafe { self.memory.data_unchecked() })
    }

    fn take_debug(&mut self) -> Vec<String> {
        mem::take(&mut *self.debug.lock())
    }
}
