//! Name command.

use crate::cli::output;
use crate::core::validation;
use crate::error::Result;

/// Validate a candidate server name.
pub fn execute(name: &str) -> Result<()> {
    validation::validate_name(name)?;
    output::success(&format!("{} is a valid server name", output::server(name)));
    Ok(())
}
