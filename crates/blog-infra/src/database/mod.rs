//! Document store access - connection management and post repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
pub mod document;
#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::{DATE_KEY_INDEX, DatabaseConfig};
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
