//! Filesystem fingerprinting for regen
//!
//! Captures checksum snapshots of the paths a generator owns and diffs
//! them to detect what running the generator changed.

pub mod checksum;
pub mod diff;
pub mod error;
pub mod io;
pub mod matcher;
pub mod snapshot;

pub use diff::{DiffEntry, GeneratorDiff, compare};
pub use error::{Error, Result};
pub use matcher::PathMatcher;
pub use snapshot::{FileFingerprint, Snapshot, snapshot};
