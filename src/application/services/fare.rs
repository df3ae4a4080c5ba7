//! Fare service: validates station input and prices trips

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{DomainError, DomainResult, FareBreakdown, FareCalculator, StationCode};
use crate::infrastructure::StationDirectory;

/// Priced trip, ready to be shown or sold
#[derive(Debug, Clone, Serialize)]
pub struct FareQuote {
    pub origin: StationCode,
    pub destination: StationCode,
    pub origin_name: Option<String>,
    pub destination_name: Option<String>,
    pub breakdown: FareBreakdown,
    pub currency: String,
}

impl FareQuote {
    pub fn total(&self) -> u32 {
        self.breakdown.total
    }
}

/// Service for fare queries over a shared, read-only calculator
#[derive(Debug, Clone)]
pub struct FareService {
    calculator: Arc<FareCalculator>,
    directory: Arc<StationDirectory>,
    currency: String,
}

impl FareService {
    pub fn new(
        calculator: Arc<FareCalculator>,
        directory: Arc<StationDirectory>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            calculator,
            directory,
            currency: currency.into(),
        }
    }

    pub fn calculator(&self) -> &FareCalculator {
        &self.calculator
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Parse user input and check the station exists in either zone.
    pub fn validate_station(&self, input: &str) -> DomainResult<StationCode> {
        let code = input.trim().parse::<StationCode>()?;
        if !self.calculator.topology().contains(&code) {
            return Err(DomainError::unknown_station(code));
        }
        Ok(code)
    }

    pub fn quote(&self, origin: &StationCode, destination: &StationCode) -> DomainResult<FareQuote> {
        let breakdown = self.calculator.compute_breakdown(origin, destination)?;

        debug!(
            %origin,
            %destination,
            zone = %breakdown.zone,
            base_zone_fee = ?breakdown.base_zone_fee,
            extension_zone_fee = ?breakdown.extension_zone_fee,
            "Fare breakdown computed"
        );
        info!(
            %origin,
            %destination,
            fare = breakdown.total,
            currency = self.currency.as_str(),
            "Fare quoted"
        );

        Ok(FareQuote {
            origin: *origin,
            destination: *destination,
            origin_name: self.directory.name_of(origin).map(str::to_string),
            destination_name: self.directory.name_of(destination).map(str::to_string),
            breakdown,
            currency: self.currency.clone(),
        })
    }

    /// Validate and price two raw station codes in one go.
    pub fn quote_codes(&self, origin: &str, destination: &str) -> DomainResult<FareQuote> {
        let origin = self.validate_station(origin)?;
        let destination = self.validate_station(destination)?;
        self.quote(&origin, &destination)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::fare::calculator::tests::standard_calculator;
    use crate::domain::TripZone;

    pub(crate) fn standard_service() -> FareService {
        let directory = StationDirectory::from_reader(
            "N9,Ha Yaek Lat Phrao\nN8,Mo Chit\nCEN,Siam\nE4,Asok\n".as_bytes(),
        )
        .unwrap();
        FareService::new(
            Arc::new(standard_calculator()),
            Arc::new(directory),
            "Baht",
        )
    }

    #[test]
    fn validate_known_stations() {
        let service = standard_service();
        assert_eq!(service.validate_station("N24").unwrap(), StationCode::north(24));
        assert_eq!(service.validate_station(" CEN ").unwrap(), StationCode::Junction);
    }

    #[test]
    fn validate_rejects_unknown_and_malformed() {
        let service = standard_service();
        assert_eq!(
            service.validate_station("N25"),
            Err(DomainError::unknown_station("N25"))
        );
        assert_eq!(
            service.validate_station("E10"),
            Err(DomainError::unknown_station("E10"))
        );
        assert!(matches!(
            service.validate_station("hello"),
            Err(DomainError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn quote_includes_names_and_breakdown() {
        let service = standard_service();
        let quote = service.quote_codes("N9", "E4").unwrap();
        assert_eq!(quote.origin_name.as_deref(), Some("Ha Yaek Lat Phrao"));
        assert_eq!(quote.destination_name.as_deref(), Some("Asok"));
        assert_eq!(quote.breakdown.zone, TripZone::ExtensionToBase);
        assert_eq!(quote.breakdown.base_zone_fee, Some(44));
        assert_eq!(quote.breakdown.extension_zone_fee, Some(15));
        assert_eq!(quote.total(), 44);
        assert_eq!(quote.currency, "Baht");
    }

    #[test]
    fn quote_without_names() {
        let service = standard_service();
        let quote = service.quote_codes("E1", "E2").unwrap();
        assert_eq!(quote.origin_name, None);
        assert_eq!(quote.total(), 16);
    }

    #[test]
    fn quote_serializes_codes_as_strings() {
        let service = standard_service();
        let quote = service.quote_codes("CEN", "N8").unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["origin"], "CEN");
        assert_eq!(json["destination"], "N8");
        assert_eq!(json["breakdown"]["total"], 44);
        assert_eq!(json["breakdown"]["zone"], "BothBase");
    }

    #[test]
    fn service_is_cheap_to_share() {
        let service = standard_service();
        let clone = service.clone();
        let handle = std::thread::spawn(move || clone.quote_codes("N24", "N9").unwrap().total());
        assert_eq!(handle.join().unwrap(), 60);
        assert_eq!(service.quote_codes("N9", "N24").unwrap().total(), 60);
    }
}
