use crate::app::i18n::Language;
use crate::core::session::LookupOutcome;
use crate::domain::model::{Coordinate, DistanceEstimate};

pub fn describe_position(language: Language, observer: Option<Coordinate>) -> String {
    let text = language.location();
    match observer {
        Some(position) => format!("{}: {}", text.your_position, position),
        None => text.waiting_for_position.to_string(),
    }
}

pub fn describe_estimate(language: Language, estimate: &DistanceEstimate) -> String {
    let text = language.location();
    format!(
        "{}: {:.2} km\n{}: {}",
        text.distance, estimate.kilometers, text.eta, estimate.eta
    )
}

/// User-facing line for a lookup result. `None` when there is nothing to say.
pub fn describe_outcome(language: Language, outcome: &LookupOutcome) -> Option<String> {
    let text = language.location();
    match outcome {
        LookupOutcome::Ignored | LookupOutcome::Superseded => None,
        LookupOutcome::Unresolved => Some(text.unresolved.to_string()),
        LookupOutcome::Unavailable(_) => Some(text.unavailable.to_string()),
        LookupOutcome::AwaitingPosition(destination) => Some(format!(
            "{}\n{}",
            destination_label(&destination.query, destination.display_name.as_deref()),
            text.waiting_for_position
        )),
        LookupOutcome::Estimated {
            destination,
            estimate,
        } => Some(format!(
            "{}\n{}",
            destination_label(&destination.query, destination.display_name.as_deref()),
            describe_estimate(language, estimate)
        )),
    }
}

fn destination_label(query: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(name) => format!("→ {} ({})", query, name),
        None => format!("→ {}", query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Eta, ResolvedDestination};
    use crate::utils::error::TravelError;

    #[test]
    fn test_describe_estimated_outcome() {
        let outcome = LookupOutcome::Estimated {
            destination: ResolvedDestination {
                query: "Rabat".to_string(),
                coordinate: Coordinate::new(34.0209, -6.8416).unwrap(),
                display_name: None,
            },
            estimate: DistanceEstimate {
                kilometers: 286.4299,
                eta: Eta {
                    hours: 4,
                    minutes: 46,
                },
            },
        };

        let line = describe_outcome(Language::En, &outcome).unwrap();
        assert!(line.contains("→ Rabat"));
        assert!(line.contains("Distance: 286.43 km"));
        assert!(line.contains("4h 46m"));
    }

    #[test]
    fn test_describe_failures() {
        assert_eq!(describe_outcome(Language::En, &LookupOutcome::Ignored), None);
        assert_eq!(
            describe_outcome(Language::Fr, &LookupOutcome::Unresolved).as_deref(),
            Some("Aucun lieu trouvé avec ce nom")
        );
        let unavailable = LookupOutcome::Unavailable(TravelError::GeocodingStatus { status: 502 });
        assert_eq!(
            describe_outcome(Language::En, &unavailable).as_deref(),
            Some("Lookup unavailable, please try again")
        );
    }

    #[test]
    fn test_describe_position() {
        assert_eq!(
            describe_position(Language::En, None),
            "Waiting for your position…"
        );
        let here = Coordinate::new(31.6295, -7.9811).unwrap();
        assert_eq!(
            describe_position(Language::En, Some(here)),
            "Your position: (31.6295, -7.9811)"
        );
    }
}
