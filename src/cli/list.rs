//! List command.
//!
//! Lists every server directory in the registry, and with `--json` the
//! resolved layout and the keys held by the secrets store.

use std::path::Path;

use crate::cli::output;
use crate::core::registry::Registry;
use crate::error::Result;

/// List servers, as plain lines or JSON.
pub fn execute(root: &Path, json: bool) -> Result<()> {
    let registry = Registry::open(root)?;
    let names = registry.server_names()?;

    if json {
        let store = registry.secret_store()?;
        let result = serde_json::json!({
            "root": registry.root(),
            "servers_dir": registry.config().regcheck.servers_dir,
            "servers": names,
            "count": names.len(),
            "secrets_file": store.path(),
            "secret_keys": store.keys().collect::<Vec<_>>(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if names.is_empty() {
        output::dimmed("no servers found");
        return Ok(());
    }

    for name in &names {
        output::list_item(name);
    }

    Ok(())
}
