use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is one inventory record. The isbn acts as the unique identifier
// within a catalog; it is not validated as a real ISBN checksum. The persisted
// shape is exactly these four keys, anything else is treated as corrupt.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, status: BookStatus) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status,
        }
    }

    // Available -> Issued; refused without change from any other state.
    pub fn issue(&mut self) -> bool {
        if self.is_available() {
            self.status = BookStatus::Issued;
            return true;
        }
        false
    }

    // Issued -> Available; refused without change from any other state.
    pub fn give_back(&mut self) -> bool {
        if !self.is_available() {
            self.status = BookStatus::Available;
            return true;
        }
        false
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.status
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.status)
    }
}
