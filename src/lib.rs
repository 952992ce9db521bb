// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the rxm-miner
// pool-connection core, located at the root of the source tree. It exports
// all public modules and types that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: pool, utils

pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::pool::client::{Client, ClientError, ClientListener, create_client};
pub use crate::pool::config::{Mode, PoolConfig};
pub use crate::pool::endpoint::Endpoint;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Establishes the library root, organizing the project into
//     pool and utils modules.
//   - Features: Exports key types (Endpoint, PoolConfig, Mode, Client) for
//     easy access and defines a common Result type.
