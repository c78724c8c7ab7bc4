//! `SeaORM` entities for the kennel tables

pub mod prelude;

pub mod breed;
pub mod dog;
