// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use byteline_uplink::Region;
use colored::*;

use crate::Error;

/// The `len` bytes at `offset` in a guest's memory.
pub(crate) fn read(mem: &[u8], offset: u32, len: u32) -> Result<&[u8], Error> {
    let range = range(mem.len(), offset, len)?;
    Ok(&mem[range])
}

/// Copies `bytes` into a guest's memory at `offset`.
pub(crate) fn write(
    mem: &mut [u8],
    offset: u32,
    bytes: &[u8],
) -> Result<(), Error> {
    let len = u32::try_from(bytes.len())
        .map_err(|_| Error::InputTooLarge(bytes.len()))?;
    let range = range(mem.len(), offset, len)?;
    mem[range].copy_from_slice(bytes);
    Ok(())
}

fn range(
    mem_len: usize,
    offset: u32,
    len: u32,
) -> Result<std::ops::Range<usize>, Error> {
    let offset = offset as usize;
    let len = len as usize;

    match offset.checked_add(len) {
        Some(end) if end <= mem_len => Ok(offset..end),
        _ => Err(Error::MemoryAccessOutOfBounds {
            offset,
            len,
            mem_len,
        }),
    }
}

/// Prints the rows of `mem` that are not all zeroes, with the bytes of the
/// last input in red and the bytes of the last output in green. `base` is the
/// address of the first byte of `mem`.
pub(crate) fn print_memory(
    base: u32,
    mem: &[u8],
    input: Region,
    output: Region,
) {
    const CSZ: usize = 128;
    const RSZ: usize = 16;

    let contains = |region: Region, addr: usize| {
        let start = region.addr().get() as usize;
        !region.is_empty()
            && addr >= start
            && addr < start + region.len() as usize
    };

    for (chunk_nr, chunk) in mem.chunks(CSZ).enumerate() {
        if chunk.iter().all(|b| *b == 0) {
            continue;
        }

        for (row_nr, row) in chunk.chunks(RSZ).enumerate() {
            let ofs = base as usize + chunk_nr * CSZ + row_nr * RSZ;

            print!("{ofs:08x}:");

            for (i, byte) in row.iter().enumerate() {
                if i % 4 == 0 {
                    print!(" ");
                }

                let byte = format!("{byte:02x}");
                if contains(input, ofs + i) {
                    print!("{} ", byte.red());
                } else if contains(output, ofs + i) {
                    print!("{} ", byte.green());
                } else {
                    print!("{byte} ");
                }
            }

            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut mem = vec![0u8; 32];

        write(&mut mem, 30, b"ab").expect("fits at the very end");
        assert_eq!(read(&mem, 30, 2).expect("in bounds"), b"ab");
        assert_eq!(read(&mem, 32, 0).expect("empty read at the end"), b"");

        assert!(matches!(
            read(&mem, 31, 2),
            Err(Error::MemoryAccessOutOfBounds {
                offset: 31,
                len: 2,
                mem_len: 32
            })
        ));
        assert!(write(&mut mem, u32::MAX, b"a").is_err());
    }
}
