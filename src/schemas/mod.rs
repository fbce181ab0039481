//! Per-endpoint constraint sets for the game backend's entities
//!
//! Each entity module exposes the constraint sets its endpoints use: create
//! and update bodies differ only in requiredness flags over the same fields,
//! and path-parameter extraction gets its own small set. Every set is built
//! once from the [default registry](crate::registry::default_registry) and
//! shared for the life of the process; a build failure is a configuration
//! defect and aborts at first use.

pub mod art;
pub mod attack;
pub mod guild;
pub mod player;

pub use art::Art;
pub use attack::Attack;
pub use guild::Guild;
pub use player::Player;
