//! Check command implementation
//!
//! Reports the effective configuration after file loading, environment
//! overrides and validation.

use tracing::info;

use crate::config::CurvefitConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CurvefitConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    println!("Configuration OK");
    println!("  models:           {}", config.models.join(", "));
    println!("  anchors:          {:?}", config.anchors);
    println!("  mark limit:       {}%", config.mark_limit);
    println!("  delimiter:        {:?}", config.delimiter);
    println!("  sample divisions: {}", config.sample_divisions);
    println!("  log level:        {}", config.log_level);
    Ok(())
}
