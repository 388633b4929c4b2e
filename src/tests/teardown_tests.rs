//! Tests for the teardown chain.

use std::io;

use crate::Teardown;

#[test]
fn later_steps_run_after_an_earlier_failure() {
    let mut ran = false;

    let mut teardown = Teardown::new();
    teardown.run(|| Err(io::Error::other("first")));
    teardown.run(|| {
        ran = true;
        Ok(())
    });

    let err = teardown.finish().unwrap_err();
    assert!(ran);
    assert_eq!(err.to_string(), "first");
}

#[test]
fn first_failure_wins() {
    let mut teardown = Teardown::new();
    teardown.run(|| Err(io::Error::other("first")));
    teardown.run(|| Err(io::Error::other("second")));

    assert_eq!(teardown.finish().unwrap_err().to_string(), "first");
}

#[test]
fn recorded_failure_precedes_later_step_failures() {
    let mut teardown = Teardown::new();
    teardown.record(io::Error::other("seeded"));
    teardown.run(|| Err(io::Error::other("later")));

    assert_eq!(teardown.finish().unwrap_err().to_string(), "seeded");
}

#[test]
fn empty_chain_finishes_clean() {
    assert!(Teardown::new().finish().is_ok());
}

#[test]
fn all_green_chain_finishes_clean() {
    let mut teardown = Teardown::new();
    teardown.run(|| Ok(()));
    teardown.run(|| Ok(()));

    assert!(teardown.finish().is_ok());
}
