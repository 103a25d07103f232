//! The interactive menu loop.
//!
//! Four nested prompt scopes: the top-level menu, the list and search
//! result menus, and the per-record action menu. Record numbers shown to
//! the user are positions in the current sequence and stay valid only
//! until the next structural change — deleting a record unwinds straight
//! to the top menu so no stale index is ever reused.
//!
//! Reader and writer are injected so the whole loop can be driven by a
//! scripted byte buffer in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use rolo_core::{
  book::PhoneBook,
  contact::{Contact, Organization, Person},
  timestamp, validate,
};
use rolo_store_json::JsonStore;
use tracing::debug;

// ─── Flow ─────────────────────────────────────────────────────────────────────

/// How a prompt scope ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
  /// Unwind to the top-level menu and keep running.
  Continue,
  /// Input is exhausted; terminate without saving.
  Quit,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state: the live phone book plus its backing store.
pub struct App {
  book:  PhoneBook,
  store: JsonStore,
}

impl App {
  pub fn new(book: PhoneBook, store: JsonStore) -> Self { Self { book, store } }

  /// Run the menu loop until `exit` (saves) or end of input (does not).
  pub fn run<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<()> {
    loop {
      let Some(action) = prompt(
        input,
        output,
        "[menu] Enter action (add, list, search, count, exit): ",
      )?
      else {
        debug!("input exhausted, leaving without saving");
        return Ok(());
      };

      let flow = match action.as_str() {
        "add" => self.add_record(input, output)?,
        "list" => self.list_menu(input, output)?,
        "search" => self.search_menu(input, output)?,
        "count" => {
          writeln!(output, "The Phone Book has {} records.", self.book.len())?;
          Flow::Continue
        }
        "exit" => {
          self.store.save(&self.book)?;
          return Ok(());
        }
        _ => {
          writeln!(output, "Invalid Command!")?;
          continue;
        }
      };
      if flow == Flow::Quit {
        debug!("input exhausted, leaving without saving");
        return Ok(());
      }
      writeln!(output)?;
    }
  }

  // ── Add ───────────────────────────────────────────────────────────────

  fn add_record<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    loop {
      let Some(kind) =
        prompt(input, output, "Enter the type (person, organization): ")?
      else {
        return Ok(Flow::Quit);
      };
      match kind.as_str() {
        "person" => return self.add_person(input, output),
        "organization" => return self.add_organization(input, output),
        _ => writeln!(output, "Please choose a word from the list!")?,
      }
    }
  }

  fn add_person<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    let Some(name) = prompt(input, output, "Enter the name of the person: ")?
    else {
      return Ok(Flow::Quit);
    };
    let Some(surname) =
      prompt(input, output, "Enter the surname of the person: ")?
    else {
      return Ok(Flow::Quit);
    };

    let Some(birth) = prompt(input, output, "Enter the birth date: ")? else {
      return Ok(Flow::Quit);
    };
    let birth = if validate::is_valid_birth_date(&birth) {
      birth
    } else {
      writeln!(output, "Bad birth date!")?;
      validate::NO_DATA.to_string()
    };

    let Some(gender) = prompt(input, output, "Enter the gender (M, F): ")?
    else {
      return Ok(Flow::Quit);
    };
    let gender = if validate::is_valid_gender(&gender) {
      gender
    } else {
      writeln!(output, "Wrong gender!")?;
      validate::NO_DATA.to_string()
    };

    let Some(number) = prompt(input, output, "Enter the number: ")? else {
      return Ok(Flow::Quit);
    };
    let number = if validate::is_valid_number(&number) {
      number
    } else {
      writeln!(output, "Wrong number format!")?;
      validate::NO_NUMBER.to_string()
    };

    let stamp = timestamp::now();
    self.book.add(Contact::Person(Person {
      name,
      number,
      time_created: stamp.clone(),
      time_edit: stamp,
      surname,
      birth,
      gender,
    }));
    writeln!(output, "The record added.")?;
    Ok(Flow::Continue)
  }

  fn add_organization<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    let Some(name) = prompt(input, output, "Enter the organization name: ")?
    else {
      return Ok(Flow::Quit);
    };
    let Some(address) = prompt(input, output, "Enter the address: ")? else {
      return Ok(Flow::Quit);
    };

    let Some(number) = prompt(input, output, "Enter the number: ")? else {
      return Ok(Flow::Quit);
    };
    let number = if validate::is_valid_number(&number) {
      number
    } else {
      writeln!(output, "Wrong number format!")?;
      validate::NO_NUMBER.to_string()
    };

    let stamp = timestamp::now();
    self.book.add(Contact::Organization(Organization {
      name,
      number,
      time_created: stamp.clone(),
      time_edit: stamp,
      address,
    }));
    writeln!(output, "The record added.")?;
    Ok(Flow::Continue)
  }

  // ── List ──────────────────────────────────────────────────────────────

  fn list_menu<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    if self.book.is_empty() {
      writeln!(output, "The Phone Book is Empty.")?;
      return Ok(Flow::Continue);
    }

    for (position, record) in self.book.records().iter().enumerate() {
      writeln!(output, "{}. {record}", position + 1)?;
    }
    writeln!(output)?;

    loop {
      let Some(action) =
        prompt(input, output, "[list] Enter action ([number], back): ")?
      else {
        return Ok(Flow::Quit);
      };
      if action == "back" {
        return Ok(Flow::Continue);
      }
      if let Some(choice) = parse_choice(&action, self.book.len()) {
        return self.open_record(choice - 1, input, output);
      }
      writeln!(output, "Invalid action!")?;
    }
  }

  // ── Search ────────────────────────────────────────────────────────────

  fn search_menu<R: BufRead, W: Write>(
    &mut self,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    if self.book.is_empty() {
      writeln!(output, "The Phone Book is Empty.")?;
      return Ok(Flow::Continue);
    }

    // `again` loops back here for a fresh query.
    loop {
      let Some(query) = prompt(input, output, "Enter search query: ")? else {
        return Ok(Flow::Quit);
      };

      let hits = self.book.search(&query);
      if hits.is_empty() {
        writeln!(output, "No record with \"{query}\" can be found!")?;
      } else {
        writeln!(output, "Found {} results:", hits.len())?;
        for (position, hit) in hits.iter().enumerate() {
          writeln!(output, "{}. {}", position + 1, hit.label)?;
        }
        writeln!(output)?;
      }

      loop {
        let Some(action) = prompt(
          input,
          output,
          "[search] Enter action ([number], back, again): ",
        )?
        else {
          return Ok(Flow::Quit);
        };
        if action == "back" {
          return Ok(Flow::Continue);
        }
        if action == "again" {
          break;
        }
        if let Some(choice) = parse_choice(&action, hits.len()) {
          return self.open_record(hits[choice - 1].index, input, output);
        }
        writeln!(output, "Invalid action!")?;
      }
    }
  }

  // ── Record menu ───────────────────────────────────────────────────────

  /// Show a record's details and enter its action menu.
  fn open_record<R: BufRead, W: Write>(
    &mut self,
    index: usize,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    writeln!(output, "{}", self.book.get(index)?.details())?;
    writeln!(output)?;
    self.record_menu(index, input, output)
  }

  fn record_menu<R: BufRead, W: Write>(
    &mut self,
    index: usize,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    loop {
      let Some(action) =
        prompt(input, output, "[record] Enter action (edit, delete, menu): ")?
      else {
        return Ok(Flow::Quit);
      };
      match action.as_str() {
        "edit" => {
          if self.edit_record(index, input, output)? == Flow::Quit {
            return Ok(Flow::Quit);
          }
        }
        "delete" => {
          // The index is dead after this; unwind to the top menu.
          self.book.remove(index)?;
          writeln!(output, "The record is deleted!")?;
          return Ok(Flow::Continue);
        }
        "menu" => return Ok(Flow::Continue),
        _ => {
          writeln!(output, "Invalid action!")?;
          continue;
        }
      }
      writeln!(output)?;
    }
  }

  fn edit_record<R: BufRead, W: Write>(
    &mut self,
    index: usize,
    input: &mut R,
    output: &mut W,
  ) -> Result<Flow> {
    let fields = self.book.get(index)?.fields();
    let select_prompt = format!("Select a field ({}): ", fields.join(", "));

    let field = loop {
      let Some(field) = prompt(input, output, &select_prompt)? else {
        return Ok(Flow::Quit);
      };
      if fields.contains(&field.as_str()) {
        break field;
      }
      writeln!(output, "Please choose a word from the list!")?;
    };

    let Some(value) = prompt(input, output, &format!("Enter {field}: "))?
    else {
      return Ok(Flow::Quit);
    };
    // Edited values are stored verbatim; only entry-time input is
    // validated against the number/date patterns.
    self.book.edit(index, &field, value, timestamp::now())?;
    writeln!(output, "The record updated!")?;
    Ok(Flow::Continue)
  }
}

// ─── Prompt plumbing ──────────────────────────────────────────────────────────

/// Write `text` without a newline, flush, and read one reply line.
/// Returns `None` when the input is exhausted.
fn prompt<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
  text: &str,
) -> Result<Option<String>> {
  write!(output, "{text}")?;
  output.flush()?;

  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  while line.ends_with('\n') || line.ends_with('\r') {
    line.pop();
  }
  Ok(Some(line))
}

/// Parse a `[number]` reply: all digits and within `1..=len`.
fn parse_choice(input: &str, len: usize) -> Option<usize> {
  if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let choice: usize = input.parse().ok()?;
  (1..=len).contains(&choice).then_some(choice)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
