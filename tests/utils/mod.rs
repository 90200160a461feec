#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod test_db;

pub use test_db::TestDb;
