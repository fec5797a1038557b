use crate::server::data::{author::AuthorRepository, tag::TagRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{author::AuthorFactory, tag::TagFactory},
};

mod get_all;
