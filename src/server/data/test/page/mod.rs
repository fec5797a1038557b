use crate::server::data::page::PageRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        page::{PageFactory, PageGroupFactory},
    },
};

mod find_published_by_slug;
mod get_published;
