// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use alloc::string::String;

use crate::{Arena, ArenaError, Region};

/// Reads the bytes of `region` out of the arena as text.
///
/// An empty region, one at the null address or with no bytes, decodes to the
/// empty string without reading anything. Byte sequences that are not valid
/// UTF-8 are not rejected: they are replaced by `U+FFFD`.
pub fn decode(arena: &Arena, region: Region) -> Result<String, ArenaError> {
    if region.is_empty() {
        return Ok(String::new());
    }

    let bytes = arena.bytes(region)?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Writes `text` into freshly allocated arena space, returning the region it
/// occupies.
///
/// The byte length is recorded as the arena's [`last_len`]. Empty text
/// allocates nothing, returns [`Region::NULL`] and leaves the recorded
/// length as it was.
///
/// [`last_len`]: Arena::last_len
pub fn encode(arena: &mut Arena, text: &str) -> Result<Region, ArenaError> {
    let bytes = text.as_bytes();
    let len =
        u32::try_from(bytes.len()).map_err(|_| ArenaError::OutOfCapacity {
            requested: bytes.len() as u64,
            available: arena.capacity(),
        })?;

    let region = arena.alloc(len)?;
    if region.addr().is_null() {
        return Ok(Region::NULL);
    }

    arena.set_last_len(len);
    arena.bytes_mut(region)?.copy_from_slice(bytes);

    Ok(region)
}
