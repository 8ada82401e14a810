//! Interactive menu session.
//!
//! # Responsibility
//! - Read operator choices and field values, call the inventory, render results.
//! - Own the confirmation gates for destructive load/save actions.
//!
//! # Invariants
//! - A failed action is reported and the loop continues; only Exit or end of
//!   input ends the session.
//! - Malformed numeric input abandons the action before any record is built.
//! - A total value outside the `Decimal` range is reported, never rendered.

use crate::view;
use gameinv_core::{parse_price, CsvFileStore, GameId, GameTitle, InventoryService, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure of a single menu action.
#[derive(Debug)]
pub enum SessionError {
    /// Menu choice outside 1..=8.
    InvalidChoice,
    /// Operator typed a value that does not parse for `field`.
    InvalidInput(&'static str),
    EmptyFilename,
    FileNotFound,
    Cancelled,
    Duplicate,
    NotFound,
    /// Inventory value does not fit in a `Decimal`.
    ValueOverflow,
    Storage(StorageError),
    /// Input stream closed while a value was expected.
    EndOfInput,
    /// Console read/write failure. Ends the session.
    Terminal(io::Error),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChoice => write!(f, "Invalid input. Please try again"),
            Self::InvalidInput(field) => write!(f, "Invalid {field} input"),
            Self::EmptyFilename => write!(f, "Filename cannot be empty"),
            Self::FileNotFound => write!(f, "File not found"),
            Self::Cancelled => write!(f, "Operation cancelled"),
            Self::Duplicate => write!(f, "The game already exists"),
            Self::NotFound => write!(f, "Game not found"),
            Self::ValueOverflow => write!(f, "Total inventory value is out of range"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::EndOfInput => write!(f, "input closed"),
            Self::Terminal(err) => write!(f, "console error: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Terminal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<io::Error> for SessionError {
    fn from(value: io::Error) -> Self {
        Self::Terminal(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    Save,
    Add,
    Remove,
    IncreaseStock,
    DecreaseStock,
    List,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Load),
            "2" => Some(Self::Save),
            "3" => Some(Self::Add),
            "4" => Some(Self::Remove),
            "5" => Some(Self::IncreaseStock),
            "6" => Some(Self::DecreaseStock),
            "7" => Some(Self::List),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Save => "save",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::IncreaseStock => "increase_stock",
            Self::DecreaseStock => "decrease_stock",
            Self::List => "list",
            Self::Exit => "exit",
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop over any line reader and writer.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    service: InventoryService<CsvFileStore>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            service: InventoryService::new(CsvFileStore::new()),
        }
    }

    #[cfg(test)]
    pub fn service(&self) -> &InventoryService<CsvFileStore> {
        &self.service
    }

    #[cfg(test)]
    pub fn service_mut(&mut self) -> &mut InventoryService<CsvFileStore> {
        &mut self.service
    }

    /// Runs until Exit is chosen or input ends.
    ///
    /// # Errors
    /// - Returns console I/O failures; every other failure is shown to the
    ///   operator and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=cli status=ok");
        loop {
            view::write_menu(&mut self.output)?;
            let choice = match self.read_field("Enter your choice: ") {
                Ok(choice) => choice,
                Err(SessionError::EndOfInput) => break,
                Err(SessionError::Terminal(err)) => return Err(err),
                Err(err) => return Err(io::Error::other(err.to_string())),
            };
            writeln!(self.output)?;

            match self.dispatch(&choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(SessionError::EndOfInput) => break,
                Err(SessionError::Terminal(err)) => return Err(err),
                Err(err) => {
                    warn!("event=menu_action module=cli status=error error={err}");
                    view::write_error(&mut self.output, &err.to_string())?;
                }
            }
        }
        info!(
            "event=session_end module=cli status=ok records={}",
            self.service.inventory().len()
        );
        Ok(())
    }

    fn dispatch(&mut self, input: &str) -> SessionResult<Flow> {
        let choice = MenuChoice::parse(input).ok_or(SessionError::InvalidChoice)?;
        match choice {
            MenuChoice::Load => self.load_data()?,
            MenuChoice::Save => self.save_data()?,
            MenuChoice::Add => self.add_game()?,
            MenuChoice::Remove => self.remove_game()?,
            MenuChoice::IncreaseStock => self.adjust_stock(true)?,
            MenuChoice::DecreaseStock => self.adjust_stock(false)?,
            MenuChoice::List => self.list_games()?,
            MenuChoice::Exit => {
                view::write_message(&mut self.output, "Thank you for using, have a good day!")?;
                return Ok(Flow::Exit);
            }
        }
        info!(
            "event=menu_action module=cli status=ok action={}",
            choice.name()
        );
        Ok(Flow::Continue)
    }

    fn load_data(&mut self) -> SessionResult<()> {
        let filename = self.read_field("Enter the filename to load: ")?;
        let path = Path::new(filename.trim());
        if !path.is_file() {
            return Err(SessionError::FileNotFound);
        }
        if !self.service.inventory().is_empty() {
            self.confirm(
                "Loading new data will clear current data. Do you want to continue? (Y/N): ",
            )?;
        }
        self.service.load_from(path)?;
        view::write_message(&mut self.output, "Successfully loaded the data")?;
        Ok(())
    }

    fn save_data(&mut self) -> SessionResult<()> {
        let filename = self.read_field("Enter the filename to save: ")?;
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(SessionError::EmptyFilename);
        }
        let path = Path::new(filename);
        if path.is_file() {
            self.confirm("File already exists. Do you want to overwrite? (Y/N): ")?;
        }
        self.service.save_to(path)?;
        view::write_message(&mut self.output, "Successfully saved the data")?;
        Ok(())
    }

    fn add_game(&mut self) -> SessionResult<()> {
        let id = self.read_parsed::<GameId>("Enter the game ID: ", "game ID")?;
        let title = self.read_field("Enter the game title: ")?;
        let manufacturer = self.read_field("Enter the manufacturer: ")?;
        let list_price = parse_price(self.read_field("Enter the price: ")?.trim())
            .ok_or(SessionError::InvalidInput("price"))?;
        let stock = self.read_parsed::<i32>("Enter the number of stocks: ", "stock")?;

        let game = GameTitle::new(id, title, manufacturer, list_price, stock);
        if !self.service.inventory_mut().add(game) {
            warn!("event=game_add module=cli status=duplicate id={id}");
            return Err(SessionError::Duplicate);
        }
        view::write_message(&mut self.output, "Successfully added a game")?;
        Ok(())
    }

    fn remove_game(&mut self) -> SessionResult<()> {
        let key = self.read_field("Enter game ID or Title to remove: ")?;
        let inventory = self.service.inventory_mut();
        let removed = match key.trim().parse::<GameId>() {
            Ok(id) => inventory.remove_by_id(id),
            Err(_) => inventory.remove_by_title(&key),
        };
        if !removed {
            return Err(SessionError::NotFound);
        }
        view::write_message(&mut self.output, "Successfully removed a game")?;
        Ok(())
    }

    fn adjust_stock(&mut self, increase: bool) -> SessionResult<()> {
        let verb = if increase { "increase" } else { "decrease" };
        let id = self.read_parsed::<GameId>(
            &format!("Enter the game ID to {verb} stock: "),
            "game ID",
        )?;
        let amount =
            self.read_parsed::<i32>(&format!("Enter the amount to {verb}: "), "amount")?;

        let inventory = self.service.inventory_mut();
        let adjusted = if increase {
            inventory.increase_stock(id, amount)
        } else {
            inventory.decrease_stock(id, amount)
        };
        if !adjusted {
            return Err(SessionError::NotFound);
        }
        view::write_message(&mut self.output, &format!("Successfully {verb}d stock"))?;
        Ok(())
    }

    fn list_games(&mut self) -> SessionResult<()> {
        let inventory = self.service.inventory();
        let games = inventory.get_all();
        if games.is_empty() {
            view::write_message(&mut self.output, "No game data available")?;
            return Ok(());
        }
        let total_value = inventory.total_value().ok_or_else(|| {
            warn!(
                "event=inventory_value module=cli status=overflow records={}",
                games.len()
            );
            SessionError::ValueOverflow
        })?;
        view::write_inventory_table(&mut self.output, &games, total_value)?;
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> SessionResult<()> {
        let answer = self.read_field(prompt)?;
        if answer.trim().eq_ignore_ascii_case("y") {
            Ok(())
        } else {
            Err(SessionError::Cancelled)
        }
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> SessionResult<T> {
        let raw = self.read_field(prompt)?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| SessionError::InvalidInput(field))
    }

    /// Prompts and returns one line without its line terminator.
    fn read_field(&mut self, prompt: &str) -> SessionResult<String> {
        view::write_prompt(&mut self.output, prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
