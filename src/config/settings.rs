#[derive(Debug, Clone)]
pub struct PrizeSettings {
    /// Share of the total pot paid out by quota rank
    pub quota_pot_share: f64,
    /// Share of what remains after the quota pot that funds skins
    pub skins_share_of_remainder: f64,
    /// Payout fraction of the quota pot for 1st, 2nd and 3rd place
    pub place_percentages: Vec<f64>,
}

impl Default for PrizeSettings {
    fn default() -> Self {
        Self {
            quota_pot_share: 0.5,
            skins_share_of_remainder: 0.6,
            place_percentages: vec![0.5, 0.3, 0.2],
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "golf_league.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        std::env::var("DATABASE_PATH")
            .map(|path| Self { path })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prizes: PrizeSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prizes: PrizeSettings::default(),
            database: DatabaseSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            prizes: PrizeSettings::default(),
            database: DatabaseSettings::from_env(),
        }
    }
}
