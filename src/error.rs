// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use byteline_uplink::ArenaError;
use thiserror::Error;

/// The error type returned by byteline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Arena error: {0}")]
    Arena(ArenaError),
    #[error(transparent)]
    CompileError(wasmer::CompileError),
    #[error(transparent)]
    ExportError(wasmer::ExportError),
    #[error("Input too large: {0} bytes")]
    InputTooLarge(usize),
    #[error(transparent)]
    InstantiationError(wasmer::InstantiationError),
    #[error(
        "Memory access out of bounds: {len} bytes at {offset} of {mem_len}"
    )]
    MemoryAccessOutOfBounds {
        offset: usize,
        len: usize,
        mem_len: usize,
    },
    #[error("Null address returned by `{0}`")]
    NullAddress(&'static str),
    #[error(transparent)]
    RuntimeError(wasmer::RuntimeError),
    #[error(transparent)]
    Utf8(std::str::Utf8Error),
}

impl From<ArenaError> for Error {
    fn from(err: ArenaError) -> Self {
        Error::Arena(err)
    }
}

impl From<wasmer::CompileError> for Error {
    fn from(err: wasmer::CompileError) -> Self {
        Error::CompileError(err)
    }
}

impl From<wasmer::ExportError> for Error {
    fn from(err: wasmer::ExportError) -> Self {
        Error::ExportError(err)
    }
}

impl From<wasmer::InstantiationError> for Error {
    fn from(err: wasmer::InstantiationError) -> Self {
        Error::InstantiationError(err)
    }
}

impl From<wasmer::RuntimeError> for Error {
    fn from(err: wasmer::RuntimeError) -> Self {
        Error::RuntimeError(err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8(err)
    }
}
