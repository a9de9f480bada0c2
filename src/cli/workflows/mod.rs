// File: mod.rs
// Created: 2026-10-13 15:12:09

//! # Workflows
//! This module contains the workflows for the CLI.
//! Currently, there are two workflows: `list_atoms` and `measure_distance`.

pub mod list;
pub mod measure;
