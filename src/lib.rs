pub mod books;
pub mod core;
pub mod inventory;
pub mod utils;
