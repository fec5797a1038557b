use crate::server::data::media::MediaRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::minutes_after, media::MediaFactory},
};

mod get_folders;
mod get_paginated;
