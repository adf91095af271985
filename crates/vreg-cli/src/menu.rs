//! Interactive registry menu
//!
//! Input is consumed as whitespace-separated tokens, so several answers may
//! share one line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{info, warn};
use vreg_domain::{CommonFields, VariantFields, VehicleRegistry, VehicleVariant};
use vreg_types::{Error, OutputFormat, Result, VehicleKind};

use crate::output::{write_listing, write_lookup};

/// Why a menu action stopped before completing
enum Interrupt {
    /// Exit chosen or input exhausted
    Exit,
    /// A numeric answer could not be parsed
    Invalid(String),
    Failed(Error),
}

impl From<std::io::Error> for Interrupt {
    fn from(e: std::io::Error) -> Self {
        Interrupt::Failed(e.into())
    }
}

impl From<Error> for Interrupt {
    fn from(e: Error) -> Self {
        Interrupt::Failed(e)
    }
}

type Step<T> = std::result::Result<T, Interrupt>;

/// Reads whitespace-separated tokens across lines
struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Step<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Interrupt::Exit);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the current line
    fn discard_pending(&mut self) {
        self.pending.clear();
    }

    fn next_number(&mut self) -> Step<i32> {
        let token = self.next_token()?;
        token.parse().map_err(|_| Interrupt::Invalid(token))
    }
}

pub struct Menu<R, W> {
    input: TokenReader<R>,
    out: W,
    registry: VehicleRegistry,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, registry: VehicleRegistry, format: OutputFormat) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            registry,
            format,
        }
    }

    /// Run until the user exits or input ends, handing back the registry
    pub fn run(mut self) -> Result<VehicleRegistry> {
        loop {
            let step = self.print_main_menu().and_then(|_| self.input.next_number()).and_then(|choice| {
                match choice {
                    1 => self.add_vehicle(),
                    2 => self.display_all(),
                    3 => self.search(),
                    4 => Err(Interrupt::Exit),
                    _ => Ok(()),
                }
            });

            match step {
                Ok(()) => {}
                Err(Interrupt::Exit) => break,
                Err(Interrupt::Invalid(token)) => {
                    warn!(token = %token, "rejected non-numeric input");
                    self.input.discard_pending();
                    writeln!(self.out, "Invalid input: expected a number, got '{}'", token)?;
                }
                Err(Interrupt::Failed(e)) => return Err(e),
            }
        }

        info!(vehicles = self.registry.count(), "menu closed");
        writeln!(self.out, "Exiting the system. Goodbye!")?;
        self.out.flush()?;
        Ok(self.registry)
    }

    fn print_main_menu(&mut self) -> Step<()> {
        writeln!(self.out, "--- Vehicle Registry Menu ---")?;
        writeln!(self.out, "1. Add New Vehicle")?;
        writeln!(self.out, "2. Display All Vehicles")?;
        writeln!(self.out, "3. Search Vehicle by ID")?;
        writeln!(self.out, "4. Exit")?;
        self.prompt("Enter your choice: ")
    }

    fn prompt(&mut self, text: &str) -> Step<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn ask_number(&mut self, text: &str) -> Step<i32> {
        self.prompt(text)?;
        self.input.next_number()
    }

    fn ask_text(&mut self, text: &str) -> Step<String> {
        self.prompt(text)?;
        self.input.next_token()
    }

    fn add_vehicle(&mut self) -> Step<()> {
        let id = self.ask_number("Enter Vehicle ID: ")?;
        let manufacturer = self.ask_text("Enter Manufacturer: ")?;
        let model = self.ask_text("Enter Model: ")?;
        let year = self.ask_number("Enter Year: ")?;

        writeln!(self.out, "Select Vehicle Type:")?;
        for (i, kind) in VehicleKind::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, kind.label())?;
        }
        self.out.flush()?;
        let selection = self.input.next_number()?;

        let Some(kind) = VehicleKind::from_menu_number(selection) else {
            warn!(selection, "unknown vehicle type, nothing added");
            return Ok(());
        };

        let mut fields = VariantFields::fuel(self.ask_text("Enter Fuel Type: ")?);
        if kind.has_battery() {
            fields = fields.with_battery(self.ask_number("Enter Battery Capacity: ")?);
        }
        if kind == VehicleKind::FlyingCar {
            fields = fields.with_flight_range(self.ask_number("Enter Flight Range: ")?);
        }
        if kind == VehicleKind::SportsCar {
            fields = fields.with_top_speed(self.ask_number("Enter Top Speed: ")?);
        }

        let common = CommonFields::new(id, manufacturer, model, year);
        self.registry.add(VehicleVariant::create(kind, common, fields));
        Ok(())
    }

    fn display_all(&mut self) -> Step<()> {
        write_listing(&mut self.out, &self.registry, self.format)?;
        Ok(())
    }

    fn search(&mut self) -> Step<()> {
        let id = self.ask_number("Enter Vehicle ID to search: ")?;
        write_lookup(&mut self.out, id, self.registry.find_by_id(id), self.format)?;
        Ok(())
    }
}
