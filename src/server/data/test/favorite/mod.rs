use crate::server::{
    data::favorite::{FavoriteRepository, ID_BATCH_SIZE},
    model::{
        character::Character,
        favorite::{FavoriteSubject, FavoriteTarget},
        planet::Planet,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod cascade;
mod delete_by_user_and_target;
mod get_by_user_id;
