// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use byteline::{
    ArenaConfig, ArenaError, Error, Guest, NativeGuest, Overflow, Session,
    NATIVE_BASE,
};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn greet_ada() -> Result<(), Error> {
    let guest = NativeGuest::with_runtime(ArenaConfig::default(), "Go/Wasm")?;
    let mut session = Session::new(guest);

    assert_eq!(session.greet("Ada")?, "Hello from Go/Wasm, Ada!");

    let input = session.last_input();
    assert_eq!(input.addr().get(), NATIVE_BASE);
    assert_eq!(input.len(), 3);
    assert_eq!(session.last_output().len(), 24);
    assert_eq!(session.guest().arena().last_len(), 24);

    Ok(())
}

#[test]
fn greet_as_rust() -> Result<(), Error> {
    let mut session = Session::new(NativeGuest::new(ArenaConfig::default())?);

    assert_eq!(session.guest().runtime(), "Rust/Wasm");
    assert_eq!(session.greet("Ferris")?, "Hello from Rust/Wasm, Ferris!");

    Ok(())
}

#[test]
fn greet_empty_name() -> Result<(), Error> {
    let guest = NativeGuest::with_runtime(ArenaConfig::default(), "Go/Wasm")?;
    let mut session = Session::new(guest);

    assert_eq!(session.greet("")?, "Hello from Go/Wasm, !");
    assert!(session.last_input().is_empty());

    Ok(())
}

#[test]
fn manual_protocol() -> Result<(), Error> {
    let mut guest =
        NativeGuest::with_runtime(ArenaConfig::default(), "Go/Wasm")?;

    let addr = guest.alloc(3)?;
    guest.write_memory(addr, b"Ada")?;

    let ret = guest.greet(addr, 3)?;
    let len = guest.result_len()?;
    assert_eq!(guest.result_len()?, len);

    let bytes = guest.read_memory(ret, len)?;
    assert_eq!(bytes, b"Hello from Go/Wasm, Ada!");

    // the guest's zero-length and null inputs both mean the empty name
    let ret = guest.greet(addr, 0)?;
    let len = guest.result_len()?;
    assert_eq!(guest.read_memory(ret, len)?, b"Hello from Go/Wasm, !");

    let ret = guest.greet(0, 3)?;
    let len = guest.result_len()?;
    assert_eq!(guest.read_memory(ret, len)?, b"Hello from Go/Wasm, !");

    Ok(())
}

#[test]
fn wraparound_keeps_greeting() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(7);

    let guest = NativeGuest::new(ArenaConfig::new(128))?;
    let mut session = Session::new(guest);

    for _ in 0..100 {
        let len = rng.gen_range(0..48);
        let name: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();

        let greeting = session.greet(&name)?;
        assert_eq!(greeting, format!("Hello from Rust/Wasm, {name}!"));

        let arena = session.guest().arena();
        assert!(arena.cursor() <= arena.capacity());
    }

    assert!(session.guest().arena().wraps() > 0);

    Ok(())
}

#[test]
fn input_larger_than_arena() -> Result<(), Error> {
    let mut session = Session::new(NativeGuest::new(ArenaConfig::new(16))?);

    let err = session.greet("a name that does not fit").unwrap_err();
    assert!(matches!(err, Error::NullAddress("alloc")));

    Ok(())
}

#[test]
fn greeting_larger_than_arena() -> Result<(), Error> {
    let mut session = Session::new(NativeGuest::new(ArenaConfig::new(24))?);

    let err = session.greet("Ada").unwrap_err();
    assert!(matches!(err, Error::NullAddress("greet")));

    Ok(())
}

#[test]
fn exhausted_arena() -> Result<(), Error> {
    let config = ArenaConfig::new(60).with_overflow(Overflow::Fail);
    let mut session = Session::new(NativeGuest::new(config)?);

    // 3 bytes of input and 26 bytes of greeting per call
    assert_eq!(session.greet("Ada")?, "Hello from Rust/Wasm, Ada!");
    assert_eq!(session.greet("Bob")?, "Hello from Rust/Wasm, Bob!");

    let err = session.greet("Eve").unwrap_err();
    assert!(matches!(err, Error::NullAddress("alloc")));

    Ok(())
}

#[test]
fn failed_call_clears_regions() -> Result<(), Error> {
    let config = ArenaConfig::new(56).with_overflow(Overflow::Fail);
    let mut session = Session::new(NativeGuest::new(config)?);

    session.greet("Ada")?;
    assert_eq!(session.last_output().addr().get(), NATIVE_BASE + 3);

    // the name still fits, its 26 byte greeting does not
    let err = session.greet("Eve").unwrap_err();
    assert!(matches!(err, Error::NullAddress("greet")));
    assert_eq!(session.last_input().addr().get(), NATIVE_BASE + 29);
    assert!(session.last_output().is_empty());

    // 24 bytes are left, too few for this name
    let err = session.greet(&"x".repeat(25)).unwrap_err();
    assert!(matches!(err, Error::NullAddress("alloc")));
    assert!(session.last_input().is_empty());
    assert!(session.last_output().is_empty());

    Ok(())
}

#[test]
fn memory_out_of_bounds() -> Result<(), Error> {
    let mut guest = NativeGuest::new(ArenaConfig::new(16))?;

    let err = guest.read_memory(NATIVE_BASE + 8, 16).unwrap_err();
    assert!(matches!(err, Error::Arena(ArenaError::OutOfBounds { .. })));

    let err = guest.write_memory(NATIVE_BASE - 1, b"x").unwrap_err();
    assert!(matches!(err, Error::Arena(ArenaError::OutOfBounds { .. })));

    Ok(())
}

#[test]
fn invalid_config() {
    let err = NativeGuest::new(ArenaConfig::new(0)).unwrap_err();
    assert!(matches!(err, Error::Arena(ArenaError::ZeroCapacity)));
}

#[test]
fn explicit_base() -> Result<(), Error> {
    let config = ArenaConfig::default().with_base(0x400);
    let mut session = Session::new(NativeGuest::new(config)?);

    session.greet("Ada")?;
    assert_eq!(session.last_input().addr().get(), 0x400);
    assert_eq!(session.last_output().addr().get(), 0x403);

    Ok(())
}
