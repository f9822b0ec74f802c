//! Report-building engine for the caja workspace.

pub mod report;
