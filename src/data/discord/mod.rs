//! Discord guild access boundary.
//!
//! The reconciler talks to Discord exclusively through the [`GuildClient`]
//! trait, which returns domain models at the boundary so that serenity
//! structures never leak into the service layer. The production
//! implementation is [`HttpGuildClient`], a REST-only client; tests substitute
//! a recording fake.

mod client;
mod http;

pub use client::{
    CreateCategoryParams, CreateRoleParams, CreateTextChannelParams, CreateVoiceChannelParams,
    GuildClient,
};
pub use http::HttpGuildClient;
