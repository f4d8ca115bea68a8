//! Domain logic for the FocusAPP site backend.
//!
//! Everything in this crate is pure: no I/O, no shared mutable state.
//! Upstream clients (`focusapp-upstream`) and the HTTP layer (`focusapp-api`)
//! feed raw data in and render the outcomes produced here.

pub mod error;
pub mod naming;
pub mod release;
pub mod repo;
pub mod tierlist;
