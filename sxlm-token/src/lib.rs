#![no_std]

pub mod admin;
pub mod common;
pub mod token;

pub use common::error::Error;

pub mod contract;

#[cfg(test)]
mod test;
