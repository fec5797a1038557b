use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, comment::CommentFactory, helpers::minutes_after},
};

mod count_by_article_id;
mod get_by_article_id;
