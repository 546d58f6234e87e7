//! Grabient CLI library.
//!
//! This crate provides the core functionality for the `grabient` CLI,
//! including palette loading, option resolution, and the refine, validate,
//! tags, render, and seed commands.

pub mod commands;
pub mod config;
pub mod input;
