// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides ANSI terminal formatting helpers for rxm-miner,
// located in the utils subdirectory. It wraps diagnostic text in bright
// color escape sequences for consistent log output.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// ANSI control sequence introducer
pub const CSI: &str = "\x1b[";
/// Reset all terminal attributes
pub const CLEAR: &str = "\x1b[0m";

/// SGR color codes used for diagnostic output
pub const RED: u8 = 31;
pub const GREEN: u8 = 32;
pub const CYAN: u8 = 36;

/// Wrap text in a bright (bold) ANSI color, followed by a reset.
pub fn bright(color: u8, text: &str) -> String {
    format!("{}1;{}m{}{}", CSI, color, text, CLEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_wraps_text() {
        assert_eq!(bright(GREEN, "ok"), "\x1b[1;32mok\x1b[0m");
        assert_eq!(bright(RED, "off"), "\x1b[1;31moff\x1b[0m");
    }
}

// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Shared ANSI helpers used by the pool config presenter.
