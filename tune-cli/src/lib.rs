//! Library target for the `tune` package.
//!
//! The primary deliverable of this package is the `tune` CLI binary
//! (`src/main.rs`). This library exists so CI can run `cargo test -p tune --doc`.

#[doc(hidden)]
pub use audio_platforms;
