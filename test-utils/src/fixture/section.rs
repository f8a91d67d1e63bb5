//! Section fixtures for creating in-memory test data.

use entity::section;

/// Default test course ID.
pub const DEFAULT_COURSE_ID: &str = "TST-1003";

/// Default section number.
pub const DEFAULT_SECTION: i32 = 1;

/// Default course title.
pub const DEFAULT_TITLE: &str = "Test Course One";

/// Default term code.
pub const DEFAULT_TERM: &str = "A6";

/// Default instructor name.
pub const DEFAULT_INSTRUCTOR: &str = "T. Ester";

/// Default instruction type code.
pub const DEFAULT_INST_TYPE: &str = "F";

/// Default enrolled student count.
pub const DEFAULT_REGISTERED: i32 = 25;

/// Default capacity.
pub const DEFAULT_CAP: i32 = 100;

/// Default credit value.
pub const DEFAULT_CREDITS: i32 = 3;

/// Creates a section entity model with default values.
///
/// # Default Values
/// - course_id: `"TST-1003"`
/// - section: `1`
/// - title: `"Test Course One"`
/// - term: `"A6"`
/// - instructor: `"T. Ester"`
/// - inst_type: `"F"`
/// - registered: `25`
/// - cap: `100`
/// - credits: `3`
///
/// # Returns
/// - `section::Model` - In-memory section entity
pub fn entity() -> section::Model {
    entity_builder().build()
}

/// Creates a section entity builder for customization.
///
/// # Returns
/// - `SectionEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> SectionEntityBuilder {
    SectionEntityBuilder::default()
}

/// Builder for in-memory section entity models.
pub struct SectionEntityBuilder {
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

impl Default for SectionEntityBuilder {
    fn default() -> Self {
        Self {
            course_id: DEFAULT_COURSE_ID.to_string(),
            section: DEFAULT_SECTION,
            title: DEFAULT_TITLE.to_string(),
            term: DEFAULT_TERM.to_string(),
            instructor: DEFAULT_INSTRUCTOR.to_string(),
            inst_type: DEFAULT_INST_TYPE.to_string(),
            registered: DEFAULT_REGISTERED,
            cap: DEFAULT_CAP,
            credits: DEFAULT_CREDITS,
        }
    }
}

impl SectionEntityBuilder {
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

    /// Builds the in-memory section entity.
    pub fn build(self) -> section::Model {
        section::Model {
            course_id: self.course_id,
            section: self.section,
            title: self.title,
            term: self.term,
            instructor: self.instructor,
            inst_type: self.inst_type,
            registered: self.registered,
            cap: self.cap,
            credits: self.credits,
        }
    }
}
