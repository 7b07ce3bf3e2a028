//! Print version information.

use crate::error::Result;

/// Execute the version command.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        println!("{}", serde_json::json!({ "version": version }));
    } else {
        println!("lifeos {version}");
    }

    Ok(())
}
