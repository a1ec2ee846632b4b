// ============================================================================
// BLOG ADMINISTRATION PANEL
// ============================================================================

// - Users (profiles) and their posts, kept in a hosted relational store
// - Collections that re-fetch after every successful write
// - One admin screen: search, two tabs, a modal form per entity
// - Notifications for every outcome of a store call
// - Structured logging

pub mod admin;
pub mod collections;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod notify;
pub mod routes;
pub mod states;
pub mod store;

pub use states::AppState;
