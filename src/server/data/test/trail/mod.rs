use crate::server::{
    data::trail::TrailRepository,
    error::AppError,
    model::trail::{CreateTrailParam, UpdateTrailParam},
};
use entity::trail::Difficulty;
use test_utils::{builder::TestBuilder, factory};

mod count_by_park;
mod create;
mod delete;
mod get_all;
mod get_by_id;
mod get_by_park;
