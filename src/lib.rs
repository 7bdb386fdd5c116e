//! Guild provisioning from a declarative template.
//!
//! Guildsmith converges a Discord guild toward a desired-state template of
//! roles, categories, and channels. It only ever creates what is missing:
//! entities that already exist are recognized by name and left untouched, so
//! a run can be repeated safely after any failure.
//!
//! # Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Model Layer** (`model/`) - The parsed template (desired state) and the
//!   remote snapshot (current state) with its name-resolution maps
//! - **Data Layer** (`data/`) - The `GuildClient` boundary and its
//!   serenity-backed implementation, converting serenity models to domain
//!   models at the boundary
//! - **Service Layer** (`service/`) - The permission overwrite calculator and
//!   the reconciler that orchestrates creation in dependency order
//! - **Error Layer** (`error/`) - Application error taxonomy
//! - **Configuration** (`config`) - Environment-based configuration

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
