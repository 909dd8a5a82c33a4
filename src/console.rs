use std::io::{Stdout, Write};

use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;

use super::tables::{DeviceRecord, EventTable};

const ROW_INDENT: usize = 10;
const NUMBER_WIDTH: usize = 20;
const MESSAGES_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SectionHeader,
    ColumnHeader,
    Separator,
    DataRow,
    Status
}

impl Role {
    pub const fn color(&self) -> Color {
        match self {
            Self::SectionHeader => Color::DarkMagenta,
            Self::ColumnHeader  => Color::Blue,
            Self::Separator     => Color::Blue,
            Self::DataRow       => Color::Green,
            Self::Status        => Color::Grey
        }
    }
}

/// Line oriented output sink with a per-line emphasis role.
pub trait Console {
    /// Switch emphasis for the following lines. Failures are ignored.
    fn set_role(&mut self, role: Role);

    fn line(&mut self, text: &str) -> std::io::Result<()>;

    fn print(&mut self, role: Role, text: &str) -> std::io::Result<()> {
        self.set_role(role);
        self.line(text)
    }

    /// Wait for the user to acknowledge, showing `prompt` first if given.
    fn pause(&mut self, prompt: Option<&str>) -> std::io::Result<()>;
}

pub struct TerminalConsole<W: Write> {
    writer: W,
    colored: bool
}

impl TerminalConsole<Stdout> {
    pub fn stdout() -> Self {
        let stdout = std::io::stdout();
        let colored = stdout.is_tty();

        Self::new(stdout, colored)
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(writer: W, colored: bool) -> Self {
        Self {
            writer,
            colored
        }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn set_role(&mut self, role: Role) {
        if self.colored {
            let _ = queue!(self.writer, SetForegroundColor(role.color()));
        }
    }

    fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{text}")?;

        self.writer.flush()
    }

    /// Block until enter is pressed. Does nothing when stdin isn't a terminal.
    fn pause(&mut self, prompt: Option<&str>) -> std::io::Result<()> {
        let stdin = std::io::stdin();

        if !stdin.is_tty() {
            return Ok(());
        }

        if let Some(prompt) = prompt {
            self.set_role(Role::Status);

            write!(self.writer, "\n{prompt}")?;

            self.writer.flush()?;
        }

        stdin.read_line(&mut String::new())?;

        Ok(())
    }
}

impl<W: Write> Drop for TerminalConsole<W> {
    fn drop(&mut self) {
        if self.colored {
            let _ = queue!(self.writer, ResetColor);
            let _ = self.writer.flush();
        }
    }
}

pub fn section_header(limit: u64, table: EventTable) -> String {
    format!("   {limit} most active devices in table \"{table}\":")
}

pub fn column_header() -> String {
    format!("{:ROW_INDENT$}{:<NUMBER_WIDTH$}{:<MESSAGES_WIDTH$}", "", "Device number", "Messages")
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn data_row(device: &DeviceRecord) -> String {
    let number = device.number.as_deref().unwrap_or("-");

    format!("{:ROW_INDENT$}{:<NUMBER_WIDTH$}{:<MESSAGES_WIDTH$}", "", number, device.messages)
}
