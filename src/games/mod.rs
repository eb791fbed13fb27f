//! Game implementations.

pub mod bingo;
