pub mod services;

// Re-export key types for convenience
pub use services::{FareQuote, FareService, SalesSummary, Ticket, TicketOffice};
