// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the pool configuration and client
// functionality of rxm-miner, located in the pool subdirectory. It declares
// submodules and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, config, endpoint

pub mod client;
pub mod config;
pub mod endpoint;

// Re-export key types for convenience
pub use client::{Client, ClientError, ClientListener, create_client};
pub use config::{Mode, PoolConfig};
pub use endpoint::Endpoint;

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Defines the pool module, organizing upstream configuration
//     into endpoint, config, and client submodules.
//   - Note: The config submodule owns the JSON codec and mode derivation;
//     the client submodule owns the variant dispatch.
