//! Section factory for creating test section entities.
//!
//! Inserts section rows with defaults taken from `fixture::section`. Inserts replace an
//! existing row sharing the same `(course_id, section)` key rather than failing.

use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{factory::helpers::next_id, fixture::section as defaults};

/// Factory for creating test sections with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::section::SectionFactory;
///
/// let section = SectionFactory::new(&db)
///     .course_id("TST-1024")
///     .term("B6")
///     .build()
///     .await?;
/// ```
pub struct SectionFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: String,
    section: i32,
    title: String,
    term: String,
    instructor: String,
    inst_type: String,
    registered: i32,
    cap: i32,
    credits: i32,
}

impl<'a> SectionFactory<'a> {
    /// Creates a new SectionFactory with default values.
    ///
    /// Defaults:
    /// - course_id: `"FAC-{id}"` where id is auto-incremented
    /// - section: `1`
    /// - title: `"Course {id}"`
    /// - remaining fields from `fixture::section`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SectionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            course_id: format!("FAC-{:04}", id),
            section: defaults::DEFAULT_SECTION,
            title: format!("Course {}", id),
            term: defaults::DEFAULT_TERM.to_string(),
            instructor: defaults::DEFAULT_INSTRUCTOR.to_string(),
            inst_type: defaults::DEFAULT_INST_TYPE.to_string(),
            registered: defaults::DEFAULT_REGISTERED,
            cap: defaults::DEFAULT_CAP,
            credits: defaults::DEFAULT_CREDITS,
        }
    }

    pub fn course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = course_id.into();
        self
    }

    pub fn section(mut self, section: i32) -> Self {
        self.section = section;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    pub fn inst_type(mut self, inst_type: impl Into<String>) -> Self {
        self.inst_type = inst_type.into();
        self
    }

    pub fn registered(mut self, registered: i32) -> Self {
        self.registered = registered;
        self
    }

    pub fn cap(mut self, cap: i32) -> Self {
        self.cap = cap;
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Builds and inserts the section, replacing any row with the same key.
    ///
    /// # Returns
    /// - `Ok(entity::section::Model)` - Stored section entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::section::Model, DbErr> {
        use entity::section::Column;

        entity::prelude::Section::insert(entity::section::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            section: ActiveValue::Set(self.section),
            title: ActiveValue::Set(self.title),
            term: ActiveValue::Set(self.term),
            instructor: ActiveValue::Set(self.instructor),
            inst_type: ActiveValue::Set(self.inst_type),
            registered: ActiveValue::Set(self.registered),
            cap: ActiveValue::Set(self.cap),
            credits: ActiveValue::Set(self.credits),
        })
        .on_conflict(
            OnConflict::columns([Column::CourseId, Column::Section])
                .update_columns([
                    Column::Title,
                    Column::Term,
                    Column::Instructor,
                    Column::InstType,
                    Column::Registered,
                    Column::Cap,
                    Column::Credits,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}

/// Creates a section with default values.
///
/// Shorthand for `SectionFactory::new(db).build().await`.
pub async fn create_section(db: &DatabaseConnection) -> Result<entity::section::Model, DbErr> {
    SectionFactory::new(db).build().await
}

/// Creates a section for a specific course and section number.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_id` - Course identifier, e.g. `"TST-1003"`
/// - `section` - Section number within the course
///
/// # Returns
/// - `Ok(entity::section::Model)` - Stored section entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_section_for_course(
    db: &DatabaseConnection,
    course_id: impl Into<String>,
    section: i32,
) -> Result<entity::section::Model, DbErr> {
    SectionFactory::new(db)
        .course_id(course_id)
        .section(section)
        .build()
        .await
}
