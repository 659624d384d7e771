use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read snapshot config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse snapshot config: {0}")]
    Parse(#[from] toml::de::Error),
}
