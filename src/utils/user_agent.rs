// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/user_agent.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the platform-identification string rxm-miner presents
// to pool-side clients, located in the utils subdirectory.
//
// Tree Location:
// - src/utils/user_agent.rs (user-agent string)
// - Depends on: std

pub fn user_agent() -> String {
    format!(
        "rxm-miner/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
