//! Platform seams: persistence, startup probes, DOM sync, share glue.

pub mod dom;
pub mod platform;
pub mod share;
pub mod storage;
