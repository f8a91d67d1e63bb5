//! Database repository layer.
//!
//! Repositories own the parameterized queries against the store. They use SeaORM entity
//! models internally and return domain models, so nothing above this layer sees entity
//! types. Values are always bound as query parameters, never spliced into SQL text.

pub mod section;
