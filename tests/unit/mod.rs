//! Unit tests module

mod config_test;
mod registry_test;
