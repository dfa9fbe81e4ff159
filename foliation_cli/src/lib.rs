//! Command line front-end for the `foliation` subset-sum search.

pub mod cli;
