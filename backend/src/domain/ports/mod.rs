//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod pet_name_command;
mod pet_name_generator;
mod pet_name_query;
mod pet_name_repository;

#[cfg(test)]
pub use pet_name_command::MockPetNameCommand;
pub use pet_name_command::PetNameCommand;
#[cfg(test)]
pub use pet_name_generator::MockPetNameGenerator;
pub use pet_name_generator::{GeneratePetNamesRequest, PetNameGenerator};
#[cfg(test)]
pub use pet_name_query::MockPetNameQuery;
pub use pet_name_query::PetNameQuery;
#[cfg(test)]
pub use pet_name_repository::MockPetNameRepository;
pub use pet_name_repository::{PetNameRepository, PetNameRepositoryError};
