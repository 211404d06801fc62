pub use super::base_entity::Entity as BaseEntity;
pub use super::entity_address::Entity as EntityAddress;
pub use super::location::Entity as Location;
pub use super::user::Entity as User;
