use crate::server::{
    data::article::ArticleRepository,
    model::article::{ArticleFilter, ArticleSort},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, article::ArticleFactory, helpers::minutes_after, tag::TagFactory},
};

mod get_by_slug;
mod get_paginated;
mod get_related;
mod get_top;
