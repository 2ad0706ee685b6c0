pub mod client;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{Fetch, StatClient};
