//! Contenda engine library.
//!
//! Exposes the territory roster, combat resolver, mission engine, session,
//! and protocol modules for use by integration tests and the binary entry
//! point.

pub mod combat;
pub mod map;
pub mod mission;
pub mod protocol;
pub mod session;
