use crate::server::data::section::SectionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_course_and_section;
mod find_by_term;
mod get_all;
