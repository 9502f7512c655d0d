//! Rosterd - a schedule/task CRUD API backed by a remote Supabase store.

pub mod api;
pub mod build_info;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod messages;
pub mod server;
pub mod service;
pub mod store;
pub mod validate;
