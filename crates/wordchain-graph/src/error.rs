pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Entity {id} has an empty display name")]
    EmptyName { id: u32 },

    #[error("Duplicate entity id: {id}")]
    DuplicateId { id: u32 },
}
