//! Filesystem utilities for promptpack.
//!
//! Generated files (the package, the manifest, the package version file)
//! are replaced atomically so a crash never leaves a half-written file.

pub mod atomic;

pub use atomic::atomic_write_file;
