//! # specimen-core
//!
//! A catalog of intentionally insecure functions used as ground truth when
//! exercising security scanners and static-analysis pipelines.
//!
//! Every function here is vulnerable on purpose: untrusted input reaches a
//! shell, a SQL string, and the filesystem without any neutralization, and
//! credentials live in plain constants. Tests pin the exact shape of each
//! defect so scanner regression suites can rely on it. Do not "fix" anything
//! in this crate — a sanitized sample is a broken sample.

pub mod credentials;
pub mod fsio;
pub mod hotspots;
pub mod query;
pub mod shell;
