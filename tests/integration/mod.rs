//! Integration test suite for proompt
//!
//! End-to-end tests that drive the compiled `proompt` binary inside a
//! temporary project. External programs are replaced with ordinary shell
//! tools through `EDITOR`, `PROOMPT_PICKER` and `PROOMPT_COPY_COMMAND`.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **list**: listing, shadowing and output formats
//! - **show**: metadata and raw output
//! - **edit**: editing and creating prompts per location
//! - **rm**: removal by name and via the picker
//! - **pick**: placeholder fill-in, stdout and clipboard
//! - **config**: config file and environment precedence

#![cfg(unix)]

mod common;

mod config;
mod edit;
mod list;
mod pick;
mod rm;
mod show;
