//! A chess rules engine: board representation, declarative per-piece move
//! generation, immutable state transition, and attack/check detection.
//! Notation (FEN, plain maps, coordinate moves) is a thin layer over the
//! core primitives. No search, no evaluation, no game adjudication.

pub mod rules;
