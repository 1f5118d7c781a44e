pub mod config;
pub mod merchant;

pub use config::{ConfigError, LoaderConfig, CONFIG_FILE};
pub use merchant::{Issue, MerchantDetails};
