//! Cross-cutting helpers for the HTTP process

pub mod health;
pub mod logging;
