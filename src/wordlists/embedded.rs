//! Embedded sample inputs
//!
//! Inputs compiled into the binary at build time.

// Include generated list from build script
include!(concat!(env!("OUT_DIR"), "/samples.rs"));
