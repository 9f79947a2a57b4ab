//! Random index sources.
//!
//! The generator never touches an RNG directly; it asks a
//! [`RandomSource`] for indices so algorithms can be tested against a
//! scripted sequence.

mod source;

pub use source::{OsRandom, RandomSource, ScriptedRandom, SeededRandom};
