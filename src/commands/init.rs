//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for first-time use, or removes the
//! existing configuration when `--delete` is given.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
