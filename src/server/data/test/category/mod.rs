use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, article::ArticleFactory, category::CategoryFactory},
};

mod find_by_slug;
mod get_all;
