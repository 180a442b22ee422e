// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::reference::load_reference;

/// Validate configuration and reference data.
///
/// Reference oddities (over-full camps, unreadable timestamps) are only
/// reported; the data is display-only.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }
    log::info!("✓ Config OK");
    log::info!("    API base URL: {}", config.api.base_url);
    log::info!("    Timeout: {}s", config.api.timeout_secs);

    let data = load_reference(config);
    for camp in &data.camps {
        if camp.currently_sheltered > camp.capacity {
            log::warn!(
                "Camp '{}' shelters {} people but has capacity {}",
                camp.name,
                camp.currently_sheltered,
                camp.capacity
            );
        }
    }
    for status in &data.statuses {
        if status.updated_at().is_none() {
            log::warn!(
                "Status '{}' has an unreadable timestamp '{}'",
                status.id,
                status.last_updated
            );
        }
    }
    log::info!(
        "✓ Reference data: {} camps, {} district statuses",
        data.camps.len(),
        data.statuses.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(run_validate(&Config::default()).is_ok());
    }

    #[test]
    fn broken_base_url_fails() {
        let mut config = Config::default();
        config.api.base_url = "127.0.0.1:8000".to_string();
        assert!(run_validate(&config).is_err());
    }
}
