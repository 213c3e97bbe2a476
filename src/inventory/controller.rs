use std::io;
use std::io::{BufRead, Write};
use tracing::debug;
use crate::core::command::Command;
use crate::inventory::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::inventory::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::inventory::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::inventory::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::inventory::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::inventory::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::inventory::domain::CatalogService;

// The interaction shell: a numbered menu over the catalog store. It performs
// no validation beyond requiring non-empty input for required fields, and it
// never surfaces a storage error to the user.
pub(crate) fn run_shell<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                              input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        print_menu(output)?;
        let choice = match prompt(input, output, "Choose option: ", true)? {
            Some(choice) => choice,
            None => return Ok(()),
        };
        match choice.as_str() {
            "1" => add_book_flow(service, input, output)?,
            "2" => issue_book_flow(service, input, output)?,
            "3" => return_book_flow(service, input, output)?,
            "4" => view_all_flow(service, output)?,
            "5" => search_flow(service, input, output)?,
            "6" => {
                writeln!(output, "Goodbye.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option.")?,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n=== Library Inventory Manager ===")?;
    writeln!(output, "1. Add Book")?;
    writeln!(output, "2. Issue Book")?;
    writeln!(output, "3. Return Book")?;
    writeln!(output, "4. View All Books")?;
    writeln!(output, "5. Search")?;
    writeln!(output, "6. Exit")?;
    Ok(())
}

// Reads one trimmed line. Required prompts re-prompt on empty input.
// End of input cancels the prompt and yields None.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W,
                                msg: &str, required: bool) -> io::Result<Option<String>> {
    loop {
        write!(output, "{}", msg)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }
        let value = line.trim().to_string();
        if required && value.is_empty() {
            continue;
        }
        return Ok(Some(value));
    }
}

fn add_book_flow<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                       input: &mut R, output: &mut W) -> io::Result<()> {
    let title = match prompt(input, output, "Title: ", true)? {
        Some(title) => title,
        None => return Ok(()),
    };
    let author = match prompt(input, output, "Author: ", true)? {
        Some(author) => author,
        None => return Ok(()),
    };
    let isbn = match prompt(input, output, "ISBN: ", true)? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };
    match AddBookCommand::new(service).execute(
        AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str())) {
        Ok(_) => writeln!(output, "Book added."),
        Err(err) => {
            debug!("add book failed: {:?}", err);
            writeln!(output, "Add failed.")
        }
    }
}

fn issue_book_flow<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                         input: &mut R, output: &mut W) -> io::Result<()> {
    let isbn = match prompt(input, output, "ISBN to issue: ", true)? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };
    match IssueBookCommand::new(service).execute(IssueBookCommandRequest { isbn }) {
        Ok(_) => writeln!(output, "Book issued."),
        Err(err) => {
            debug!("issue book failed: {:?}", err);
            writeln!(output, "Issue failed.")
        }
    }
}

fn return_book_flow<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                          input: &mut R, output: &mut W) -> io::Result<()> {
    let isbn = match prompt(input, output, "ISBN to return: ", true)? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };
    match ReturnBookCommand::new(service).execute(ReturnBookCommandRequest { isbn }) {
        Ok(_) => writeln!(output, "Book returned."),
        Err(err) => {
            debug!("return book failed: {:?}", err);
            writeln!(output, "Return failed.")
        }
    }
}

fn view_all_flow<W: Write>(service: &mut dyn CatalogService, output: &mut W) -> io::Result<()> {
    match ListBooksCommand::new(service).execute(ListBooksCommandRequest {}) {
        Ok(res) => {
            if res.lines.is_empty() {
                writeln!(output, "No books found.")?;
            }
            for (i, line) in res.lines.iter().enumerate() {
                writeln!(output, "{}. {}", i + 1, line)?;
            }
            Ok(())
        }
        Err(err) => {
            debug!("list books failed: {:?}", err);
            writeln!(output, "No books found.")
        }
    }
}

fn search_flow<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                     input: &mut R, output: &mut W) -> io::Result<()> {
    let choice = match prompt(input, output, "Search by (1) Title or (2) ISBN: ", true)? {
        Some(choice) => choice,
        None => return Ok(()),
    };
    match choice.as_str() {
        "1" => {
            let title = match prompt(input, output, "Enter title: ", true)? {
                Some(title) => title,
                None => return Ok(()),
            };
            match SearchBooksCommand::new(service).execute(SearchBooksCommandRequest { title }) {
                Ok(res) if !res.books.is_empty() => {
                    for book in res.books {
                        writeln!(output, "{}", book)?;
                    }
                    Ok(())
                }
                _ => writeln!(output, "Nothing found."),
            }
        }
        "2" => {
            let isbn = match prompt(input, output, "Enter ISBN: ", true)? {
                Some(isbn) => isbn,
                None => return Ok(()),
            };
            match GetBookCommand::new(service).execute(GetBookCommandRequest { isbn }) {
                Ok(res) => writeln!(output, "{}", res.book),
                Err(err) => {
                    debug!("get book failed: {:?}", err);
                    writeln!(output, "Nothing found.")
                }
            }
        }
        _ => writeln!(output, "Invalid option."),
    }
}
