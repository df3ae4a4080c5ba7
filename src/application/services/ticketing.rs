//! Ticket office: keeps the running list of sold tickets

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::fare::FareQuote;
use crate::domain::StationCode;

/// A sold ticket
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    /// 1-based sequence number within the session
    pub number: usize,
    pub origin: StationCode,
    pub destination: StationCode,
    pub fare: u32,
    pub issued_at: DateTime<Utc>,
}

/// End-of-session totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub tickets_sold: usize,
    pub total_collected: u64,
}

#[derive(Debug, Default)]
pub struct TicketOffice {
    tickets: Vec<Ticket>,
}

impl TicketOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next ticket will carry.
    pub fn next_number(&self) -> usize {
        self.tickets.len() + 1
    }

    pub fn sell(&mut self, quote: &FareQuote) -> &Ticket {
        let ticket = Ticket {
            number: self.next_number(),
            origin: quote.origin,
            destination: quote.destination,
            fare: quote.total(),
            issued_at: Utc::now(),
        };

        info!(
            number = ticket.number,
            origin = %ticket.origin,
            destination = %ticket.destination,
            fare = ticket.fare,
            "Ticket sold"
        );

        self.tickets.push(ticket);
        &self.tickets[self.tickets.len() - 1]
    }

    pub fn tickets_sold(&self) -> usize {
        self.tickets.len()
    }

    pub fn total_collected(&self) -> u64 {
        self.tickets.iter().map(|t| u64::from(t.fare)).sum()
    }

    pub fn summary(&self) -> SalesSummary {
        SalesSummary {
            tickets_sold: self.tickets_sold(),
            total_collected: self.total_collected(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fare::tests::standard_service;

    #[test]
    fn empty_office() {
        let office = TicketOffice::new();
        assert_eq!(office.next_number(), 1);
        assert_eq!(
            office.summary(),
            SalesSummary {
                tickets_sold: 0,
                total_collected: 0
            }
        );
    }

    #[test]
    fn sells_and_accumulates() {
        let service = standard_service();
        let mut office = TicketOffice::new();

        let first = office.sell(&service.quote_codes("E9", "E7").unwrap()).clone();
        assert_eq!(first.number, 1);
        assert_eq!(first.fare, 23);
        assert_eq!(first.origin, StationCode::east(9));

        let second = office.sell(&service.quote_codes("N20", "N12").unwrap());
        assert_eq!(second.number, 2);
        assert_eq!(second.fare, 39);
        assert!(first.issued_at <= second.issued_at);
        assert_eq!(office.next_number(), 3);
        assert_eq!(
            office.summary(),
            SalesSummary {
                tickets_sold: 2,
                total_collected: 62
            }
        );
    }
}
