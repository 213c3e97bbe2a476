use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is the shape exchanged between the interaction shell and the
// catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.status
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.status)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            status: other.status,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            status: other.status,
        }
    }
}
