pub mod analyzer;
pub mod auth;
pub mod banner;
pub mod clipboard;
pub mod commands;
pub mod consts;
pub mod generator;
pub mod prompts;
pub mod render;
pub mod rewrite;
pub mod session;
pub mod spinner;
pub mod store;
pub mod theme;
