use crate::server::{
    data::park::ParkRepository,
    error::AppError,
    model::park::{CreateParkParam, UpdateParkParam},
};
use chrono::NaiveDate;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_all;
mod get_by_id;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
