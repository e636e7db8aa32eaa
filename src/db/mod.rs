//! Database layer (Postgres).

pub mod postgres;

pub use postgres::Db;
