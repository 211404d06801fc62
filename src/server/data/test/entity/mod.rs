use crate::server::{data::entity::EntityRepository, model::entity::CreateEntityParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
