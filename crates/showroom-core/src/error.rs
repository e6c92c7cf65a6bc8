use thiserror::Error;

/// Failures raised while declaring the scene or applying a panel selection.
///
/// Pointer handling never returns these; it logs and carries on instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShowroomError {
    #[error("surface `{0}` is declared twice")]
    DuplicateSurface(String),
    #[error("surface `{surface}` references unknown material `{material}`")]
    UnknownMaterial { surface: String, material: String },
    #[error("no catalog option with id `{0}`")]
    UnknownOption(String),
    #[error("catalog option `{0}` has no price")]
    UnpricedOption(String),
}
