//! HTTP request handlers.
//!
//! Controllers turn path parameters into service parameters, choose the status code from
//! the service result, and tag store failures with the operation that failed before
//! handing them to `AppError`'s response conversion.

pub mod course;

#[cfg(test)]
mod test;
