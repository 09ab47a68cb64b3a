// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configuration store and quoting session for the steel price calculator.
//!
//! Configuration changes are expressed as [`Command`]s and applied by the
//! pure [`apply`] function. The [`PricingStore`] wraps that with loading,
//! seeding and persistence over an injected repository. The [`Calculator`]
//! holds the inputs of one quote and derives its price on request.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod calculator;
mod command;
mod error;
mod ids;
mod repository;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use calculator::{Calculator, Quote};
pub use command::Command;
pub use error::{CoreError, RepositoryError};
pub use ids::generate_id;
pub use repository::{DiscountRepository, InMemoryRepository, RuleRepository};
pub use state::{Collection, PricingConfig, TransitionResult};
pub use store::PricingStore;
