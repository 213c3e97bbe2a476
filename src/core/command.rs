use crate::core::library::InventoryError;

#[derive(Debug)]
pub enum CommandError {
    Storage {
        message: String,
    },
    Serialization {
        message: String,
    },
    NotFound {
        message: String,
    },
    InvalidState {
        message: String,
    },
}

// Command captures one shell-triggered unit of work against the catalog
// store. Commands borrow the service mutably for a single execution.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<InventoryError> for CommandError {
    fn from(other: InventoryError) -> Self {
        match other {
            InventoryError::Storage { message } => {
                CommandError::Storage { message }
            }
            InventoryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            InventoryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            InventoryError::InvalidState { message } => {
                CommandError::InvalidState { message }
            }
        }
    }
}
