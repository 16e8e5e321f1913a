//! CLI commands for rubric

pub mod dispatch;
pub mod extract;
pub mod list;
pub mod render;
pub mod show;
pub mod update;
