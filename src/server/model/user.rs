//! User domain models and parameters.
//!
//! A user is an entity plus authentication and legal identification details.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::model::{
        entity::{CreateEntityParam, Entity},
        location::{promote_changes, Address},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub entity: Entity,
    pub auth_id: Option<String>,
    pub legal_id: Option<String>,
    pub legal_id_type: Option<String>,
    pub active: bool,
}

impl User {
    pub fn from_entity(entity: Entity, user: entity::user::Model) -> Self {
        Self {
            entity,
            auth_id: user.auth_id,
            legal_id: user.legal_id,
            legal_id_type: user.legal_id_type,
            active: user.active,
        }
    }

    /// Converts the user with its address list for API responses.
    ///
    /// Change records on the addresses are promoted into `change_desc` with
    /// their list position.
    pub fn into_dto(self, addresses: Vec<Address>) -> UserDto {
        let change_desc = promote_changes(&addresses, Vec::new());

        UserDto {
            pub_id: self.entity.pub_id,
            owner_pub_id: self.entity.owner_pub_id,
            publicly_readable: self.entity.publicly_readable,
            last_updated: self.entity.last_updated,
            auth_id: self.auth_id,
            legal_id: self.legal_id,
            legal_id_type: self.legal_id_type,
            active: self.active,
            addresses: addresses.into_iter().map(Address::into_dto).collect(),
            change_desc,
        }
    }
}

/// Parameters for creating a user and its backing entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateUserParam {
    pub owner_pub_id: Option<String>,
    pub publicly_readable: bool,
    pub auth_id: Option<String>,
    pub legal_id: Option<String>,
    pub legal_id_type: Option<String>,
    pub active: bool,
}

impl CreateUserParam {
    /// Sets the legal id together with its type; the two are only meaningful
    /// as a pair.
    pub fn set_legal_id(&mut self, id: impl Into<String>, id_type: impl Into<String>) {
        self.legal_id = Some(id.into());
        self.legal_id_type = Some(id_type.into());
    }

    pub fn clear_legal_id(&mut self) {
        self.legal_id = None;
        self.legal_id_type = None;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn entity_param(&self) -> CreateEntityParam {
        CreateEntityParam {
            owner_pub_id: self.owner_pub_id.clone(),
            publicly_readable: self.publicly_readable,
        }
    }

    /// Splits a create request into user parameters and its address list.
    ///
    /// Users default to active and not publicly readable. A legal id without
    /// a type (or vice versa) is dropped.
    pub fn from_dto(dto: CreateUserDto) -> (Self, Vec<Address>) {
        let mut param = Self {
            owner_pub_id: dto.owner_pub_id,
            publicly_readable: dto.publicly_readable.unwrap_or(false),
            auth_id: dto.auth_id,
            ..Default::default()
        };
        param.set_active(dto.active.unwrap_or(true));
        match (dto.legal_id, dto.legal_id_type) {
            (Some(id), Some(id_type)) => param.set_legal_id(id, id_type),
            _ => param.clear_legal_id(),
        }

        let addresses = dto.addresses.into_iter().map(Address::from_dto).collect();

        (param, addresses)
    }
}
