use crate::config::{default_config_content, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, default_config_content())?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
