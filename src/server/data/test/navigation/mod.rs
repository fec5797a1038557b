use crate::server::data::navigation::NavigationRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, navigation::NavigationItemFactory, page::PageFactory},
};

mod find_by_slug;
