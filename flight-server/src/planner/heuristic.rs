//! Remaining-time estimators for the informed search.

use chrono::Duration;

use crate::domain::Iata;

/// Estimates the remaining travel time from an airport to the destination.
///
/// Implementations must never return a negative duration and must never
/// overestimate the true remaining time. With an admissible estimate the
/// first itinerary the informed search accepts is the fastest one.
pub trait Heuristic {
    fn estimate(&self, from: &Iata, to: &Iata) -> Duration;
}

/// Always estimates zero; the informed search then orders exactly like the
/// uninformed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &Iata, _to: &Iata) -> Duration {
        Duration::zero()
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Iata, &Iata) -> Duration,
{
    fn estimate(&self, from: &Iata, to: &Iata) -> Duration {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_heuristic() {
        let del = Iata::parse("DEL").unwrap();
        let blr = Iata::parse("BLR").unwrap();
        assert_eq!(ZeroHeuristic.estimate(&del, &blr), Duration::zero());
    }

    #[test]
    fn closures_are_heuristics() {
        let del = Iata::parse("DEL").unwrap();
        let blr = Iata::parse("BLR").unwrap();
        let same_airport_free = |from: &Iata, to: &Iata| {
            if from == to {
                Duration::zero()
            } else {
                Duration::minutes(45)
            }
        };

        assert_eq!(same_airport_free.estimate(&del, &blr), Duration::minutes(45));
        assert_eq!(same_airport_free.estimate(&blr, &blr), Duration::zero());
    }
}
