// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use core::fmt::Write;
use core::ptr;

#[cfg(target_arch = "wasm32")]
pub mod ext {
    extern "C" {
        pub fn host_debug(ofs: i32, len: u32);
    }
}

const DEBUG_BUFFER_SIZE: usize = 16 * 1024;
static mut DEBUG_BUFFER: [u8; DEBUG_BUFFER_SIZE] = [0u8; DEBUG_BUFFER_SIZE];

/// Write a string to the debug buffer and report it to the host.
pub fn debug(s: &str) -> fmt::Result {
    let mut w = DebugWriter::new();
    w.write_str(s)?;
    w.flush();
    Ok(())
}

/// A small struct that can `fmt::Write` to the debug buffer.
///
/// Output that does not fit in the buffer is cut off.
#[derive(Debug)]
pub struct DebugWriter {
    ofs: usize,
}

impl DebugWriter {
    pub fn new() -> Self {
        DebugWriter { ofs: 0 }
    }

    pub fn ofs(&self) -> usize {
        self.ofs
    }

    /// Report what has been written so far to the host. Outside of a Wasm
    /// module there is no host to report to, and the output is dropped.
    pub fn flush(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let written = self.written();
            unsafe {
                ext::host_debug(written.as_ptr() as i32, written.len() as u32)
            }
        }
    }

    /// What has been written so far.
    pub fn written(&self) -> &[u8] {
        // SAFETY: see `buf`.
        let buf = unsafe { &*ptr::addr_of!(DEBUG_BUFFER) };
        &buf[..self.ofs]
    }

    fn buf(&mut self) -> &mut [u8] {
        // SAFETY: the module is single threaded and only one writer is alive
        // at any given time.
        let buf = unsafe { &mut *ptr::addr_of_mut!(DEBUG_BUFFER) };
        &mut buf[self.ofs..]
    }
}

impl Default for DebugWriter {
    fn default() -> Self {
        DebugWriter::new()
    }
}

impl Write for DebugWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();

        let buf = self.buf();
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);

        self.ofs += n;

        if n < bytes.len() {
            return Err(fmt::Error);
        }
        Ok(())
    }
}

/// Macro to format and send debug output to the host
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {
        {
            #[allow(unused)]
            use core::fmt::Write as _;

            let mut w = $crate::debug::DebugWriter::new();
            let _ = write!(&mut w, $($tt)*);
            w.flush();
        }
    };
}
