use thiserror::Error;

use crate::kind::EffectKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("no 2D rendering surface available for {0}")]
    UnsupportedSurface(EffectKind),
    #[error("unknown effect `{0}`")]
    UnknownEffect(String),
    #[error("unknown season `{0}`")]
    UnknownSeason(String),
    #[error("host error: {0}")]
    Host(String),
}
