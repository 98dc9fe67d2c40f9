use thiserror::Error;

/// Contract violations when editing or querying an org chart.
///
/// Absence of a hire target is not an error; `Organization::hire` signals
/// that with `None`.
#[derive(Error, Debug)]
pub enum OrgError {
    #[error("position not found in this chart")]
    PositionNotFound,

    #[error("cycle detected: {0:?} is an ancestor of the target position")]
    CycleDetected(String),

    #[error("chart already has a root position: {0:?}")]
    RootAlreadyDefined(String),

    #[error("the root position cannot become a direct report")]
    RootDisplaced,

    #[error("organization has no root position")]
    MissingRoot,
}

pub type OrgResult<T> = Result<T, OrgError>;
