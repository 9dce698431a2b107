pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no root branch found (expected exactly one branch with depth 0)")]
    MissingRoot,

    #[error("duplicate branch id: {id}")]
    DuplicateBranch { id: String },
}
