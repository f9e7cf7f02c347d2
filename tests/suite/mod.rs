//! Integration test modules

mod config;
mod quiz_flow;
mod scoring;
