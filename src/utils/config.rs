use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub currency_symbol: String,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            currency_symbol: env::var("CART_CURRENCY")
                .unwrap_or("₺".to_string())
                .to_string(),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_string(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_string(),
        };

        tracing::debug!(
            "Config: successfully loaded for {} environment",
            config.environment
        );
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CART_CURRENCY must not be blank"));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
