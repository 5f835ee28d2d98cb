use crate::commands::{CmdMessage, CmdResult, SpendzPaths};
use crate::config::SpendzConfig;
use crate::error::{Result, SpendzError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SpendzPaths, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SpendzConfig::load(&paths.home)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::info(format!(
                "Using data file {}",
                paths.data_file.display()
            )));
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = SpendzConfig::load(&paths.home)?;
            let val = config
                .get(&key)
                .ok_or_else(|| SpendzError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SpendzConfig::load(&paths.home)?;
            config.set(&key, &value)?;
            config.save(&paths.home)?;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
