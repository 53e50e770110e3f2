//! View models for the text report.

use chrono::Duration;

use crate::carriers::CarrierNames;
use crate::domain::{Itinerary, Segment};
use crate::planner::{Comparison, SearchMode};

/// Width of the horizontal rules framing the leg table.
const TABLE_WIDTH: usize = 130;

/// Shown in the flight column when a segment has no flight number.
const NO_FLIGHT_NUMBER: &str = "N/A";

/// Format a duration as `"{h}h {m}m"`, truncated to whole minutes.
pub fn format_duration(duration: Duration) -> String {
    let mins = duration.num_minutes();
    format!("{}h {}m", mins / 60, mins % 60)
}

fn format_price(price: f64) -> String {
    format!("{price:.0}")
}

/// One flight leg, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRow {
    /// 1-based position in the itinerary.
    pub index: usize,
    pub from: String,
    pub to: String,
    /// Departure time (HH:MM).
    pub departure: String,
    /// Arrival time (HH:MM).
    pub arrival: String,
    pub duration: String,
    pub airline: String,
    pub flight: String,
    pub price: String,
    /// Layover before the next leg, if there is one.
    pub layover: Option<String>,
}

impl LegRow {
    fn from_segment(
        index: usize,
        segment: &Segment,
        layover: Option<Duration>,
        carriers: &CarrierNames,
    ) -> Self {
        Self {
            index,
            from: segment.origin().to_string(),
            to: segment.destination().to_string(),
            departure: segment.departure().format("%H:%M").to_string(),
            arrival: segment.arrival().format("%H:%M").to_string(),
            duration: format_duration(segment.duration()),
            airline: carriers.display_name(segment.carrier()).to_string(),
            flight: segment
                .flight_number()
                .unwrap_or(NO_FLIGHT_NUMBER)
                .to_string(),
            price: format_price(segment.price()),
            layover: layover.map(format_duration),
        }
    }

    /// The leg as a fixed-width table row.
    pub fn line(&self) -> String {
        format!(
            "{:<4}{:<12}{:<10}{:<10}{:<8}{:<25}{:<10}₹{}",
            self.index,
            format!("{}→{}", self.from, self.to),
            self.departure,
            self.arrival,
            self.duration,
            self.airline,
            self.flight,
            self.price,
        )
    }

    /// The layover row printed after this leg, if any.
    pub fn layover_line(&self) -> Option<String> {
        self.layover
            .as_ref()
            .map(|layover| format!("{:4}{:<12}{:<10}{:<10}{:<8}", "", "[Layover]", "", "", layover))
    }
}

/// A whole itinerary, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryView {
    /// Travel date (YYYY-MM-DD).
    pub date: String,
    /// Total elapsed time, layovers included.
    pub total_duration: String,
    pub total_price: String,
    /// Every airport touched, e.g. `DEL → BOM → BLR`.
    pub route: String,
    /// `VIA BOM, HYD` or `Direct`.
    pub via: String,
    pub legs: Vec<LegRow>,
}

impl ItineraryView {
    /// Build the view, resolving airline names through `carriers`.
    pub fn from_itinerary(itinerary: &Itinerary, carriers: &CarrierNames) -> Self {
        let layovers = itinerary.layovers();
        let legs = itinerary
            .segments()
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                LegRow::from_segment(i + 1, segment, layovers.get(i).copied(), carriers)
            })
            .collect();

        let route = itinerary
            .route()
            .iter()
            .map(|airport| airport.as_str())
            .collect::<Vec<_>>()
            .join(" → ");

        let via = if itinerary.is_direct() {
            "Direct".to_string()
        } else {
            let stops: Vec<_> = itinerary.via().iter().map(|a| a.to_string()).collect();
            format!("VIA {}", stops.join(", "))
        };

        Self {
            date: itinerary.date().format("%Y-%m-%d").to_string(),
            total_duration: format_duration(itinerary.total_duration()),
            total_price: format_price(itinerary.total_price()),
            route,
            via,
            legs,
        }
    }

    /// Table body: each leg followed by its layover row.
    pub fn rows(&self) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.legs.len() * 2);
        for leg in &self.legs {
            rows.push(leg.line());
            if let Some(layover) = leg.layover_line() {
                rows.push(layover);
            }
        }
        rows
    }

    pub fn header(&self) -> String {
        format!(
            "{:<4}{:<12}{:<10}{:<10}{:<8}{:<25}{:<10}{:<8}",
            "Leg", "From→To", "Dep", "Arr", "Dur", "Airline", "Flight", "Price"
        )
    }

    pub fn thin_rule(&self) -> String {
        "-".repeat(TABLE_WIDTH)
    }

    pub fn thick_rule(&self) -> String {
        "=".repeat(TABLE_WIDTH)
    }
}

/// Both strategies' answers, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    /// `CONNECTED` or `DIRECT`.
    pub mode_upper: String,
    /// `Connected` or `Direct`.
    pub mode_title: String,
    pub best: Option<ItineraryView>,
    pub informed: Option<ItineraryView>,
    pub others: Vec<ItineraryView>,
    /// Shown instead of everything else when nothing was found.
    pub empty_message: &'static str,
}

impl ComparisonView {
    pub fn from_comparison(comparison: &Comparison, carriers: &CarrierNames) -> Self {
        let view = |it: &Itinerary| ItineraryView::from_itinerary(it, carriers);
        let (mode_title, empty_message) = match comparison.mode {
            SearchMode::Connected => ("Connected", "No connected routes found."),
            SearchMode::Direct => ("Direct", "No direct flights available for this date."),
        };

        Self {
            mode_upper: mode_title.to_uppercase(),
            mode_title: mode_title.to_string(),
            best: comparison.best().map(view),
            informed: comparison.informed.as_ref().map(view),
            others: comparison.alternatives().iter().map(view).collect(),
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarrierCode, Iata};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn seg(from: &str, to: &str, dep: (u32, u32), arr: (u32, u32), price: f64) -> Segment {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        Segment::new(
            iata(from),
            iata(to),
            date.and_hms_opt(dep.0, dep.1, 0).unwrap(),
            date.and_hms_opt(arr.0, arr.1, 0).unwrap(),
            price,
        )
        .unwrap()
    }

    fn two_leg() -> Itinerary {
        let first = seg("DEL", "BOM", (8, 0), (10, 5), 4000.4)
            .with_carrier(CarrierCode::parse("AI").unwrap())
            .with_flight_number("AI-101");
        let second = seg("BOM", "BLR", (11, 0), (12, 30), 2999.6)
            .with_carrier(CarrierCode::parse("6E").unwrap());
        Itinerary::new(vec![Arc::new(first), Arc::new(second)]).unwrap()
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::minutes(0)), "0h 0m");
        assert_eq!(format_duration(Duration::minutes(59)), "0h 59m");
        assert_eq!(format_duration(Duration::minutes(270)), "4h 30m");
        assert_eq!(format_duration(Duration::seconds(3659)), "1h 0m");
    }

    #[test]
    fn itinerary_view_fields() {
        let view = ItineraryView::from_itinerary(&two_leg(), &CarrierNames::builtin());

        assert_eq!(view.date, "2024-05-01");
        assert_eq!(view.total_duration, "4h 30m");
        assert_eq!(view.total_price, "7000");
        assert_eq!(view.route, "DEL → BOM → BLR");
        assert_eq!(view.via, "VIA BOM");
        assert_eq!(view.legs.len(), 2);
    }

    #[test]
    fn leg_rows() {
        let view = ItineraryView::from_itinerary(&two_leg(), &CarrierNames::builtin());
        let first = &view.legs[0];
        let second = &view.legs[1];

        assert_eq!(first.index, 1);
        assert_eq!(first.departure, "08:00");
        assert_eq!(first.arrival, "10:05");
        assert_eq!(first.duration, "2h 5m");
        assert_eq!(first.airline, "Air India");
        assert_eq!(first.flight, "AI-101");
        assert_eq!(first.layover.as_deref(), Some("0h 55m"));

        assert_eq!(second.airline, "IndiGo");
        assert_eq!(second.flight, "N/A");
        assert_eq!(second.layover, None);
    }

    #[test]
    fn rows_interleave_layovers() {
        let view = ItineraryView::from_itinerary(&two_leg(), &CarrierNames::builtin());
        let rows = view.rows();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("1   DEL→BOM     08:00"));
        assert!(rows[1].contains("[Layover]"));
        assert!(rows[1].contains("0h 55m"));
        assert!(rows[2].starts_with("2   BOM→BLR"));
        assert!(rows[2].ends_with("₹3000"));
    }

    #[test]
    fn catalog_names_override_builtin() {
        let mut carriers = CarrierNames::builtin();
        carriers.insert(CarrierCode::parse("6E").unwrap(), "IndiGo Airlines");
        let view = ItineraryView::from_itinerary(&two_leg(), &carriers);

        assert_eq!(view.legs[1].airline, "IndiGo Airlines");
    }

    #[test]
    fn direct_view() {
        let it = Itinerary::new(vec![Arc::new(seg("DEL", "BOM", (8, 0), (10, 0), 4000.0))]).unwrap();
        let view = ItineraryView::from_itinerary(&it, &CarrierNames::new());

        assert_eq!(view.via, "Direct");
        assert_eq!(view.legs[0].airline, "NA");
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn comparison_titles() {
        let comparison = Comparison {
            mode: SearchMode::Connected,
            uninformed: vec![],
            informed: None,
            states_explored: 0,
        };
        let view = ComparisonView::from_comparison(&comparison, &CarrierNames::builtin());

        assert_eq!(view.mode_upper, "CONNECTED");
        assert_eq!(view.mode_title, "Connected");
        assert!(view.best.is_none());
        assert_eq!(view.empty_message, "No connected routes found.");
    }
}
