//! Progress display for running games

pub mod reporter;
