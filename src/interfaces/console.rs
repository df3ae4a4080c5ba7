//! Interactive ticket counter
//!
//! Prompts for origin and destination until both are valid stations,
//! prints the fare breakdown, sells the ticket and asks whether to
//! continue. Works on any `BufRead`/`Write` pair so it can be driven
//! from stdin/stdout or from a test buffer.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::application::{FareQuote, FareService, SalesSummary, TicketOffice};
use crate::domain::StationCode;
use crate::support::errors::AppError;

/// Answer that ends the session at the continue prompt
const STOP_ANSWER: &str = "N";

pub struct ConsoleSession<'a, R, W> {
    service: &'a FareService,
    office: TicketOffice,
    input: R,
    output: W,
    range_hint: String,
}

impl<'a, R: BufRead, W: Write> ConsoleSession<'a, R, W> {
    pub fn new(service: &'a FareService, input: R, output: W) -> Self {
        let (first, last) = service.calculator().topology().ends();
        Self {
            service,
            office: TicketOffice::new(),
            input,
            output,
            range_hint: format!("{}-{}", first, last),
        }
    }

    /// Run until the operator answers `N` or input ends, then print totals.
    pub fn run(mut self) -> Result<SalesSummary, AppError> {
        loop {
            if self.office.tickets_sold() > 0 {
                writeln!(self.output)?;
            }
            writeln!(self.output, "Ticket{}", self.office.next_number())?;

            let Some(origin) = self.read_station("origin")? else {
                break;
            };
            let Some(destination) = self.read_station("destination")? else {
                break;
            };

            let quote = self.service.quote(&origin, &destination)?;
            self.print_quote(&quote)?;
            self.office.sell(&quote);
            writeln!(self.output)?;

            match self.prompt("Do you want to continue (Y/N)? ")? {
                Some(answer) if answer != STOP_ANSWER => continue,
                _ => break,
            }
        }

        let summary = self.office.summary();
        writeln!(self.output)?;
        writeln!(self.output, "{} tickets are sold.", summary.tickets_sold)?;
        writeln!(
            self.output,
            "{} {} is collected.",
            summary.total_collected,
            self.service.currency()
        )?;
        self.output.flush()?;

        Ok(summary)
    }

    /// Keep prompting until a known station is entered. `None` on EOF.
    fn read_station(&mut self, role: &str) -> Result<Option<StationCode>, AppError> {
        let prompt = format!("Enter {} station ({}): ", role, self.range_hint);
        loop {
            let Some(answer) = self.prompt(&prompt)? else {
                debug!(role, "Input closed while reading station");
                return Ok(None);
            };
            match self.service.validate_station(&answer) {
                Ok(code) => return Ok(Some(code)),
                Err(e) if e.is_input_error() => {
                    warn!(role, input = answer.as_str(), error = %e, "Rejected station input");
                    writeln!(
                        self.output,
                        "Station {} does not exist. Enter a station between {}.",
                        answer, self.range_hint
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_quote(&mut self, quote: &FareQuote) -> Result<(), AppError> {
        let currency = self.service.currency();
        if let Some(fee) = quote.breakdown.base_zone_fee {
            writeln!(self.output, "Base Station Zone: Fee = {} {}", fee, currency)?;
        }
        if let Some(fee) = quote.breakdown.extension_zone_fee {
            writeln!(self.output, "Extension Station Zone: Fee = {} {}", fee, currency)?;
        }
        writeln!(
            self.output,
            "Origin = {} = {}, Destination = {} = {}: Fee = {}",
            quote.origin,
            quote.origin_name.as_deref().unwrap_or("None"),
            quote.destination,
            quote.destination_name.as_deref().unwrap_or("None"),
            quote.total()
        )?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
