use std::io;

use anyhow::Context;

use vendemas_cli::{PosConfig, Session};
use vendemas_pos::PosService;

fn main() -> anyhow::Result<()> {
    let config = PosConfig::from_env();
    vendemas_observability::init_with(config.log_format);
    config.warn_fallbacks();

    let catalog = config.load_catalog()?;
    tracing::info!(products = catalog.len(), "register ready");

    let mut session = Session::new(PosService::with_catalog(catalog), io::stdout().lock());
    session
        .run(io::stdin().lock())
        .context("register session failed")?;

    tracing::info!("register closed");
    Ok(())
}
