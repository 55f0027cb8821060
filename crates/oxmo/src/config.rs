//! Types for the configuration file usable by OXMO
use std::{
    env::current_dir,
    fs::read_to_string,
    io::{Error, ErrorKind},
    path::PathBuf,
};

use anyhow::Context;
use etcetera::{choose_base_strategy, BaseStrategy};
use oxmo_convert::Options;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The config for the CLI usage of OXMO
pub struct Config {
    /// The options used for converting documents, overridden by any flags given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<Options>,
}

impl Config {
    fn load_local() -> std::io::Result<(String, PathBuf)> {
        let mut path = current_dir()?;
        path.push("oxmorc.json");
        Ok((read_to_string(&path)?, path))
    }

    fn load_base() -> std::io::Result<(String, PathBuf)> {
        let mut path = choose_base_strategy()
            .map_err(|err| Error::new(ErrorKind::NotFound, err.to_string()))?
            .config_dir();
        path.push("oxmo");
        path.push("config.json");
        Ok((read_to_string(&path)?, path))
    }

    /// Loads the configuration from well-known paths, or the default configuration when none
    /// exists
    ///
    /// # Errors
    /// When the config exists but cannot be parsed
    pub fn load() -> anyhow::Result<Self> {
        let Ok((file, path)) = Self::load_local().or_else(|_| Self::load_base()) else {
            log::debug!("no config found, using defaults");
            return Ok(Self::default());
        };
        log::debug!("using config at {}", path.display());
        Self::parse(&file)
            .with_context(|| format!("configuration at {} cannot be parsed", path.display()))
    }

    /// Reads a configuration from JSON
    ///
    /// # Errors
    /// When the JSON doesn't describe a configuration
    pub fn parse(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use oxmo_annotation::Indent;
    use oxmo_convert::{Options, TextExtent};
    use pretty_assertions::assert_eq;

    use super::Config;

    #[test]
    fn serde() -> anyhow::Result<()> {
        let config = Config::parse(
            r#"{
            "convert": {
                "modelName": "Resistor",
                "textExtent": "flow",
                "indent": "tabs"
            }
        }"#,
        )?;
        assert_eq!(
            config.convert,
            Some(Options {
                model_name: String::from("Resistor"),
                text_extent: TextExtent::Flow,
                indent: Indent::Tabs,
                ..Options::default()
            }),
            "missing options should be defaulted"
        );

        assert_eq!(
            serde_json::to_string(&Config::default())?,
            "{}",
            "missing sections should be omitted"
        );
        assert_eq!(
            serde_json::to_string(&Config {
                convert: Some(Options::default())
            })?,
            r#"{"convert":{"modelName":"DummyModel","strict":false,"normalizeExtent":false,"textExtent":"normal","indent":{"spaces":2}}}"#
        );
        Ok(())
    }

    #[test]
    fn unknown_values() {
        assert!(Config::parse(r#"{ "convert": { "textExtent": "wide" } }"#).is_err());
    }
}
