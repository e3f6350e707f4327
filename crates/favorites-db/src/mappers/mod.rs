//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read back from PostgreSQL.
//! Rows written by older clients store absent text as `''`; those come back
//! as `None`.

mod favorite;
mod group;
mod share;

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
