// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for utility functions in rxm-miner,
// located in the utils subdirectory. It declares submodules for shared
// utility logic used across the project.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, json, user_agent

pub mod format;
pub mod json;
pub mod user_agent;

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Defines the utils module with JSON field accessors, ANSI
//     formatting helpers, and the platform user-agent string.
