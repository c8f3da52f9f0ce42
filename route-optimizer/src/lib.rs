//! Transit route optimizer.
//!
//! Finds routes through a rail network with few transfers and ranks them
//! by "felt time": riding time plus how painful each transfer and
//! congested station is.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod scoring;
pub mod status;
pub mod web;
