//! Experience tier progress
//!
//! `resolve` is the public boundary: it never fails, reporting problems
//! through the sentinel values on `ProgressResult` instead.

pub mod resolver;
pub mod result;

pub use resolver::{current_tier, next_tier, resolve, top_tier, try_resolve};
pub use result::{ProgressResult, TierLabel, SENTINEL, TOP_OF_LADDER};
