#![deny(clippy::all, clippy::pedantic)]

pub mod posts;
pub mod tags;
