/// Crate-wide result alias.
pub type LightWaveResult<T> = Result<T, LightWaveError>;

/// Errors raised by the light wave crate.
///
/// Only [`LightWaveError::Configuration`] is produced by the effect itself (at build time). The
/// remaining variants cover the rendering surface and attribute parsing around it.
#[derive(thiserror::Error, Debug)]
pub enum LightWaveError {
    /// Invalid wave configuration, rejected by `WaveBuilder::build`.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Raster surface failure.
    #[error("render error: {0}")]
    Render(String),

    /// Attribute or config JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with the source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LightWaveError {
    /// Build a [`LightWaveError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`LightWaveError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LightWaveError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LightWaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
