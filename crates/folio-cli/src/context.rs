use crate::args::Cli;
use anyhow::Result;
use folio_client::{Client, Config, Overrides};
use once_cell::sync::OnceCell;

/// Per-invocation state: resolved configuration plus a lazily-built client.
pub struct ExecutionContext {
    config: Config,
    client: OnceCell<Client>,
}

impl ExecutionContext {
    pub fn new(cli: &Cli) -> Result<Self> {
        let file = match Config::default_path() {
            Ok(path) => Config::load_from(&path)?,
            // No resolvable config dir just means flags/env decide everything.
            Err(_) => Config::default(),
        };

        let overrides = Overrides {
            api_url: cli.api_url.clone(),
            asset_base: cli.asset_base.clone(),
            content_dir: cli.content_dir.clone(),
            relay_url: cli.relay_url.clone(),
        };

        Ok(Self {
            config: Config::resolve(file, overrides),
            client: OnceCell::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> Result<&Client> {
        self.client
            .get_or_try_init(|| Client::from_config(&self.config).map_err(anyhow::Error::from))
    }
}
