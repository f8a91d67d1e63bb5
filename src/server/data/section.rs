//! Section data repository for database operations.
//!
//! Provides the `SectionRepository` for reading course sections. Every list query is
//! ordered by `course_id` then `section` so identical requests against an unchanged
//! store return rows in the same order.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::course::CourseSection;

/// Repository providing read access to the sections table.
pub struct SectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectionRepository<'a> {
    /// Creates a new SectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SectionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every section in the store.
    ///
    /// # Returns
    /// - `Ok(Vec<CourseSection>)` - All sections, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<CourseSection>, DbErr> {
        self.fetch(entity::prelude::Section::find()).await
    }

    /// Finds all sections of a course.
    ///
    /// # Arguments
    /// - `course_id` - Course identifier, matched exactly
    ///
    /// # Returns
    /// - `Ok(Vec<CourseSection>)` - Sections of the course, empty if none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_course_id(&self, course_id: &str) -> Result<Vec<CourseSection>, DbErr> {
        self.fetch(
            entity::prelude::Section::find()
                .filter(entity::section::Column::CourseId.eq(course_id)),
        )
        .await
    }

    /// Finds the section matching both course ID and section number.
    ///
    /// Returns a vector rather than an option to keep the shape shared by every lookup;
    /// the composite primary key limits it to at most one row.
    ///
    /// # Arguments
    /// - `course_id` - Course identifier, matched exactly
    /// - `section` - Section number within the course
    ///
    /// # Returns
    /// - `Ok(Vec<CourseSection>)` - Zero or one matching section
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_course_and_section(
        &self,
        course_id: &str,
        section: i32,
    ) -> Result<Vec<CourseSection>, DbErr> {
        self.fetch(
            entity::prelude::Section::find()
                .filter(entity::section::Column::CourseId.eq(course_id))
                .filter(entity::section::Column::Section.eq(section)),
        )
        .await
    }

    /// Finds all sections offered in a term.
    ///
    /// # Arguments
    /// - `term` - Term code, matched exactly
    ///
    /// # Returns
    /// - `Ok(Vec<CourseSection>)` - Sections in the term, empty if none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_term(&self, term: &str) -> Result<Vec<CourseSection>, DbErr> {
        self.fetch(
            entity::prelude::Section::find().filter(entity::section::Column::Term.eq(term)),
        )
        .await
    }

    async fn fetch(
        &self,
        query: Select<entity::prelude::Section>,
    ) -> Result<Vec<CourseSection>, DbErr> {
        let entities = query
            .order_by_asc(entity::section::Column::CourseId)
            .order_by_asc(entity::section::Column::Section)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CourseSection::from_entity).collect())
    }
}
