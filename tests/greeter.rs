// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use byteline::{module, Error, Guest, Session, ARENA_LEN};

#[test]
fn greet_ada() -> Result<(), Error> {
    let mut session = Session::new(module!("greeter")?);

    assert_eq!(session.greet("Ada")?, "Hello from Rust/Wasm, Ada!");
    assert_eq!(session.last_output().len(), 26);

    // the greeting is written right behind the name
    let input = session.last_input();
    let output = session.last_output();
    assert_eq!(output.addr().get(), input.addr().get() + 3);

    Ok(())
}

#[test]
fn greet_empty_name() -> Result<(), Error> {
    let mut session = Session::new(module!("greeter")?);

    assert_eq!(session.greet("")?, "Hello from Rust/Wasm, !");

    Ok(())
}

#[test]
fn alloc_zero_is_null() -> Result<(), Error> {
    let mut guest = module!("greeter")?;

    assert_eq!(guest.alloc(0)?, 0);
    let first = guest.alloc(4)?;
    assert_ne!(first, 0);
    assert_eq!(guest.alloc(4)?, first + 4);

    Ok(())
}

#[test]
fn result_len_is_stable() -> Result<(), Error> {
    let mut guest = module!("greeter")?;

    let addr = guest.alloc(5)?;
    guest.write_memory(addr, b"Grace")?;
    guest.greet(addr, 5)?;

    assert_eq!(guest.result_len()?, 28);
    assert_eq!(guest.result_len()?, 28);

    Ok(())
}

#[test]
fn wraparound() -> Result<(), Error> {
    let mut session = Session::new(module!("greeter")?);

    let name = "x".repeat(1000);
    let first = session.greet(&name)?;
    let base = session.last_input().addr();

    let mut wrapped = false;
    for _ in 0..2 * ARENA_LEN as usize / 1000 {
        assert_eq!(session.greet(&name)?, first);
        wrapped |= session.last_input().addr() == base;
    }
    assert!(wrapped);

    Ok(())
}

#[test]
fn oversized_name() -> Result<(), Error> {
    let mut session = Session::new(module!("greeter")?);

    let name = "x".repeat(ARENA_LEN as usize + 1);
    let err = session.greet(&name).unwrap_err();
    assert!(matches!(err, Error::NullAddress("alloc")));

    Ok(())
}

#[test]
fn wraparound_is_reported() -> Result<(), Error> {
    let mut session = Session::new(module!(debug "greeter")?);

    let name = "x".repeat(1000);
    for _ in 0..2 * ARENA_LEN as usize / 1000 {
        session.greet(&name)?;
    }

    assert!(session
        .debug()
        .iter()
        .any(|msg| msg.starts_with("arena wrapped")));

    Ok(())
}

#[test]
fn refusal_is_reported() -> Result<(), Error> {
    let mut session = Session::new(module!(debug "greeter")?);

    let name = "x".repeat(ARENA_LEN as usize + 1);
    let err = session.greet(&name).unwrap_err();
    assert!(matches!(err, Error::NullAddress("alloc")));

    let expected = format!("arena refused {} bytes", name.len());
    assert_eq!(session.debug(), &[expected]);

    Ok(())
}
