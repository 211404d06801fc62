use super::{address, complete_location};
use crate::server::{
    data::address::AddressRepository,
    error::{
        location::LocationError,
        storage::{StorageError, StorageStep},
        AppError,
    },
    model::location::Location,
    service::address_list::AddressListService,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory, factory::location::LocationFactory};

mod update_address_list;
