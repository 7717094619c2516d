// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use byteline_uplink::{Address, Region};

use crate::guest::Guest;
use crate::{memory, Error};

/// The host's side of a conversation with a guest.
///
/// A session performs the boundary protocol: ask the guest for memory, write
/// the input into it, call the guest, and read back the result whose length
/// the guest reports separately.
#[derive(Debug)]
pub struct Session<G> {
    guest: G,
    input: Region,
    output: Region,
    debug: Vec<String>,
}

impl<G: Guest> Session<G> {
    pub fn new(guest: G) -> Self {
        Self {
            guest,
            input: Region::NULL,
            output: Region::NULL,
            debug: Vec::new(),
        }
    }

    /// Has the guest greet `name`, returning the greeting.
    ///
    /// An empty name is not written anywhere: the guest is called with the
    /// null address and a length of zero.
    ///
    /// The last input and output regions only ever describe the current
    /// call: whatever it did not get to is left null.
    pub fn greet(&mut self, name: &str) -> Result<String, Error> {
        self.input = Region::NULL;
        self.output = Region::NULL;

        let bytes = name.as_bytes();
        let len = u32::try_from(bytes.len())
            .map_err(|_| Error::InputTooLarge(bytes.len()))?;

        let addr = self.guest.alloc(len)?;
        self.collect_debug();
        tracing::trace!(len, addr, "allocated input");

        if len != 0 && addr == 0 {
            tracing::warn!(len, "guest refused allocation");
            return Err(Error::NullAddress("alloc"));
        }

        self.guest.write_memory(addr, bytes)?;
        self.input = Region::new(Address::new(addr), len);

        let ret = self.guest.greet(addr, len)?;
        self.collect_debug();
        tracing::trace!(addr = ret, "guest returned");

        if ret == 0 {
            tracing::warn!(input = %self.input, "guest returned no result");
            return Err(Error::NullAddress("greet"));
        }

        let ret_len = self.guest.result_len()?;
        self.output = Region::new(Address::new(ret), ret_len);

        let bytes = self.guest.read_memory(ret, ret_len)?;
        let greeting = std::str::from_utf8(&bytes)?.to_owned();

        tracing::debug!(output = %self.output, %greeting, "greeted");

        Ok(greeting)
    }

    /// Prints a dump of the guest memory, highlighting the last input in red
    /// and the last output in green.
    pub fn snap(&self) {
        println!("memory snapshot");
        self.guest.with_memory(|base, mem| {
            memory::print_memory(base, mem, self.input, self.output)
        });
    }

    /// Where the last input was written.
    pub fn last_input(&self) -> Region {
        self.input
    }

    /// Where the last output was read from.
    pub fn last_output(&self) -> Region {
        self.output
    }

    /// Debug messages the guest reported during this session.
    pub fn debug(&self) -> &[String] {
        &self.debug
    }

    pub fn guest(&self) -> &G {
        &self.guest
    }

    pub fn guest_mut(&mut self) -> &mut G {
        &mut self.guest
    }

    pub fn into_inner(self) -> G {
        self.guest
    }

    fn collect_debug(&mut self) {
        self.debug.extend(self.guest.take_debug());
    }
}
