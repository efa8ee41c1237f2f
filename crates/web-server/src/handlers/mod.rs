//! Route handlers. Every handler answers with JSON; what the classic
//! server-rendered app showed as a flash message is the `message` field.

use serde::{Deserialize, Serialize};

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

/// A successful mutation: the user-facing message plus the affected record.
#[derive(Debug, Serialize)]
pub struct Flash<T> {
    pub message: String,
    pub data: T,
}

impl<T> Flash<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Body of the search forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Search results and how many there are.
#[derive(Debug, Serialize)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(search_term: String, data: Vec<T>) -> Self {
        Self {
            search_term,
            count: data.len(),
            data,
        }
    }
}

/// What an edit page needs: the current record and the selectable values.
#[derive(Debug, Serialize)]
pub struct EditForm<T> {
    pub record: T,
    pub options: forms::FormOptions,
}
