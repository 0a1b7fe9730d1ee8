//! Pawsona core domain logic.
//!
//! Pure, I/O-free building blocks shared by the stores, the generation
//! worker, and the API surface: the rarity/title selector, the title
//! catalog, prompt composition, redemption-code rules, and the retry
//! policy. Everything here is deterministic given its inputs except the
//! two draw functions, which use the process-wide random source.

pub mod catalog;
pub mod cdkey;
pub mod error;
pub mod job;
pub mod pet;
pub mod prompt;
pub mod rarity;
pub mod selection;
pub mod types;
