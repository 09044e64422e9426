pub mod config;
pub mod dataset;
pub mod encoder;
pub mod model;
pub mod state;
pub mod web;

#[cfg(test)]
pub mod testutil;
