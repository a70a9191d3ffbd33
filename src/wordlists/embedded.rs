//! Embedded sample dictionary
//!
//! Raw `(word, count)` records compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/sample.rs"));
