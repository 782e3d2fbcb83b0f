//! Compensation comparison engine for EOR and AOR engagement models.
//!
//! This crate computes, for a gross annual salary and a small set of ancillary
//! parameters, the total cost borne by an employer and the net income received
//! by a worker under the Employer-of-Record ("EOR") and Agent-of-Record
//! ("AOR") engagement models in Argentina, across a multi-year horizon that
//! accounts for vesting equity grants.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
