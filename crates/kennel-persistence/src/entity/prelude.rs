pub use super::breed::Entity as Breed;
pub use super::dog::Entity as Dog;
