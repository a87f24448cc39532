use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::monitor::DisplayQuery;

pub const APP_DIR: &str = "ddc-vcp-control";
pub const CONFIG_FILE: &str = "config.kdl";

/// Runtime settings of the DDC/CI transport and default discovery queries
///
/// ```kdl
/// update-capabilities #true
/// sleep-after-command #false
/// query backend="i2c-dev"
/// query manufacturer="DEL" model="DELL U2720Q"
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Read each monitor's capability string during discovery and reject
    /// VCP codes it does not list
    #[serde(default = "default_true")]
    pub update_capabilities: bool,
    /// Wait out the DDC/CI inter-command delay after every VCP exchange
    #[serde(default = "default_true")]
    pub sleep_after_command: bool,
    pub queries: Vec<DisplayQuery>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_capabilities: true,
            sleep_after_command: true,
            queries: Vec::new(),
        }
    }
}

impl Config {
    /// Default location, `$XDG_CONFIG_HOME/ddc-vcp-control/config.kdl` on Linux
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!("loading config from {}", path.display());
                Self::from_kdl(&text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_kdl(text: &str) -> Result<Self> {
        let doc = text
            .parse::<KdlDocument>()
            .map_err(|err: kdl::KdlError| Error::Config(err.to_string()))?;

        let mut config = Self::default();
        for node in doc.nodes() {
            match node.name().value() {
                "update-capabilities" => config.update_capabilities = flag(node)?,
                "sleep-after-command" => config.sleep_after_command = flag(node)?,
                "query" => config.queries.push(query(node)?),
                other => warn!("ignoring unknown config node '{}'", other),
            }
        }
        Ok(config)
    }
}

/// A node holding exactly one boolean argument
fn flag(node: &KdlNode) -> Result<bool> {
    match node.entries() {
        [entry] if entry.name().is_none() => entry.value().as_bool(),
        _ => None,
    }
    .ok_or_else(|| {
        Error::Config(format!(
            "'{}' expects a single boolean argument",
            node.name().value()
        ))
    })
}

/// One `query` node; several properties on the same node must all match
fn query(node: &KdlNode) -> Result<DisplayQuery> {
    let mut parts = Vec::new();
    for entry in node.entries() {
        let Some(key) = entry.name() else {
            return Err(Error::Config(
                "query entries must be key=\"value\" properties".to_string(),
            ));
        };
        let value = entry
            .value()
            .as_string()
            .ok_or_else(|| Error::Config(format!("query property '{}' must be a string", key.value())))?
            .to_string();

        parts.push(match key.value() {
            "backend" => DisplayQuery::Backend(value),
            "id" => DisplayQuery::DisplayId(value),
            "manufacturer" => DisplayQuery::ManufacturerId(value),
            "model" => DisplayQuery::ModelName(value),
            "serial" => DisplayQuery::SerialNumber(value),
            other => {
                return Err(Error::Config(format!("unknown query property '{}'", other)));
            }
        });
    }

    Ok(match parts.len() {
        0 => DisplayQuery::Any,
        1 => parts.remove(0),
        _ => DisplayQuery::And(parts),
    })
}
