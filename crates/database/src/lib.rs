//! # Fyyur Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! SQLite database holding venues, artists and shows.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate encapsulates all database-specific logic. It
//!   provides a clean API to the rest of the application, hiding the
//!   underlying SQL.
//! - **Explicit transactions:** Every mutation opens a transaction and either
//!   commits it or rolls it back before returning. No handle is global; the
//!   pool is owned by the `DbRepository` the caller constructs.
//! - **Asynchronous & Pooled:** All operations are asynchronous and go through
//!   a `SqlitePool`.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: Applies the embedded schema migrations.
//! - `DbRepository`: Holds the pool and provides all data access methods.
//! - `seed_demo_data`: Loads the demo listings.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod seed;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
pub use seed::{SeedSummary, seed_demo_data};
