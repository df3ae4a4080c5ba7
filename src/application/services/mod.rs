//! Application services

pub(crate) mod fare;
mod ticketing;

pub use fare::{FareQuote, FareService};
pub use ticketing::{SalesSummary, Ticket, TicketOffice};
