#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid repository id '{0}': expected \"owner/name\"")]
    InvalidRepoId(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
