// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wleven command-line interface.
//!
//! Two subcommands: `distance` to compare two strings, and `config` to print the
//! configuration a given set of flags resolves to. Flags layer over an optional
//! JSON config file, so a shared class definition can live in one place.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use weighted_leven::{CharClassConfig, ClassMode};

#[derive(Parser)]
#[command(
    name = "wleven",
    about = "Levenshtein distance with character-class weighted edits",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the weighted distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Compare UTF-8 bytes instead of characters
        #[arg(long)]
        bytes: bool,

        /// Print a JSON object instead of a bare number
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        class: ClassArgs,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        class: ClassArgs,
    },
}

/// Character-class flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ClassArgs {
    /// JSON config file (`mode`, `blacklistChars`, `whitelistChars`, `penalty`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Classification mode: none, blacklist, whitelist or both
    #[arg(short, long)]
    pub mode: Option<ClassMode>,

    /// Characters whose edits are penalized in blacklist mode
    #[arg(long)]
    pub blacklist: Option<String>,

    /// Characters whose edits are not penalized in whitelist mode
    #[arg(long)]
    pub whitelist: Option<String>,

    /// Weight of a penalized edit (at least 1)
    #[arg(short, long)]
    pub penalty: Option<u32>,
}

impl ClassArgs {
    /// Resolve flags over the config file (or the defaults when there is none).
    ///
    /// Picking `blacklist` or `whitelist` mode without any set falls back to the
    /// stock set for that mode.
    pub fn resolve(&self) -> Result<CharClassConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                log::info!("Loading configuration from: {}", path.display());
                CharClassConfig::from_json(&raw)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => match self.mode {
                Some(ClassMode::Blacklist) => CharClassConfig::default_blacklist(),
                Some(ClassMode::Whitelist) => CharClassConfig::default_whitelist(),
                Some(ClassMode::Both) => CharClassConfig::default_blacklist()
                    .with_whitelist(weighted_leven::DEFAULT_WHITELIST.chars()),
                _ => CharClassConfig::new(),
            },
        };

        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(chars) = &self.blacklist {
            config = config.with_blacklist(chars.chars());
        }
        if let Some(chars) = &self.whitelist {
            config = config.with_whitelist(chars.chars());
        }
        if let Some(penalty) = self.penalty {
            config = config.with_penalty(penalty)?;
        }

        log::debug!(
            "resolved config: mode={} blacklist={} whitelist={} penalty={}",
            config.mode(),
            config.blacklist().len(),
            config.whitelist().len(),
            config.penalty()
        );
        Ok(config)
    }
}
