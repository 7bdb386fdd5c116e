//! Test factories for Serenity API objects shared across the workspace.

pub mod serenity;
