use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::Config;

#[derive(Debug, StructOpt)]
#[structopt(about = "Serves random names and name ranges from a CSV file")]
#[structopt(rename_all = "kebab-case")]
pub struct Cli {
    #[structopt(long, short, parse(from_os_str))]
    /// Read settings from this JSON file
    pub config: Option<PathBuf>,
    #[structopt(long, short, parse(from_os_str))]
    /// CSV file of names, the first line is a header [default: utils/data.csv]
    pub data_file: Option<PathBuf>,
    #[structopt(long)]
    /// Host address to bind to [default: 127.0.0.1]
    pub host: Option<String>,
    #[structopt(long, short)]
    /// Port to listen on [default: 8080]
    pub port: Option<u16>,
}

impl Cli {
    /// Build the effective configuration. Flags win over the config file,
    /// which wins over defaults.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(data_file) = self.data_file {
            config.data_file = data_file;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}
