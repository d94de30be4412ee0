//! Unit tests for timegrid.

mod config_tests;
mod perf_tests;
mod serialization_tests;
