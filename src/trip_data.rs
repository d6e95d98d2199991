//! 内置行程数据集
//!
//! 整个进程生命周期内只读

use crate::models::{
    Accommodation, ColorTag, CostItem, FlightSegment, Flights, Highlight, IconTag, ItineraryDay,
    TripData, TripDetails,
};

pub static TRIP: TripData = TripData {
    details: TripDetails {
        title: "Dubai Family Extravaganza 2026",
        dates: "Jan 19 - Jan 24, 2026",
        travelers: "10 Travelers",
        grand_total: 860490,
        airline: "IndiGo (Direct)",
    },
    costs: &[
        CostItem {
            name: "Flights (IndiGo)",
            value: 223790,
            color: ColorTag::Blue,
        },
        CostItem {
            name: "Hotel (Millennium Plaza)",
            value: 360000,
            color: ColorTag::Gold,
        },
        CostItem {
            name: "Activities & Food",
            value: 276700,
            color: ColorTag::Emerald,
        },
    ],
    flights: Flights {
        outbound: FlightSegment {
            date: "Mon, 19 Jan 2026",
            route: "Mumbai (BOM) → Dubai (DXB)",
            segment_type: "Direct Flight",
            details: "IndiGo Round Trip Fare",
        },
        inbound: FlightSegment {
            date: "Sat, 24 Jan 2026",
            route: "Dubai (DXB) → Mumbai (BOM)",
            segment_type: "Direct Flight",
            details: "Departs 12:15 PM",
        },
    },
    days: &[
        ItineraryDay {
            day: 1,
            date: "Jan 19",
            title: "Arrival Night",
            icon: IconTag::Plane,
            color: ColorTag::Blue,
            cost: 13000,
            highlights: &[
                "Arrive Dubai",
                "Check-in: Millennium Plaza Downtown",
                "Light Dinner",
            ],
            notes: "Hotel cost excluded here (see breakdown)",
        },
        ItineraryDay {
            day: 2,
            date: "Jan 20",
            title: "Iconic Views",
            icon: IconTag::Camera,
            color: ColorTag::Emerald,
            cost: 47700,
            highlights: &["Dubai Frame", "Miracle Garden", "Global Village"],
            notes: "Full day taxi included",
        },
        ItineraryDay {
            day: 3,
            date: "Jan 21",
            title: "Downtown Dubai",
            icon: IconTag::Building,
            color: ColorTag::Purple,
            cost: 71000,
            highlights: &["Dubai Aquarium", "Burj Khalifa (Non-prime)", "Dubai Mall"],
            notes: "Lunch + Dinner included",
        },
        ItineraryDay {
            day: 4,
            date: "Jan 22",
            title: "Desert Safari",
            icon: IconTag::Sun,
            color: ColorTag::Orange,
            cost: 52000,
            highlights: &["Morning Errands", "Premium Safari (Soft Ride)", "BBQ Dinner"],
            notes: "Morning taxi included",
        },
        ItineraryDay {
            day: 5,
            date: "Jan 23",
            title: "Warner Bros World",
            icon: IconTag::Ticket,
            color: ColorTag::Red,
            cost: 91000,
            highlights: &[
                "Warner Bros World Abu Dhabi",
                "AC Coach Transfer",
                "In-park Lunch",
            ],
            notes: "Most expensive activity day",
        },
        ItineraryDay {
            day: 6,
            date: "Jan 24",
            title: "Departure",
            icon: IconTag::ArrowRight,
            color: ColorTag::Slate,
            cost: 2000,
            highlights: &["Breakfast at Hotel", "Checkout", "Airport Transfer"],
            notes: "Flight at 12:15 PM",
        },
    ],
    accommodation: Accommodation {
        name: "Millennium Plaza Downtown",
        rooms: "3 Rooms",
        nights: "5 Nights",
        rating: "5★ Property",
        total: 360000,
    },
    highlights: &[
        Highlight {
            label: "5★ Hotel Stay",
            icon: IconTag::Star,
            color: ColorTag::Gold,
        },
        Highlight {
            label: "Direct Flights",
            icon: IconTag::Plane,
            color: ColorTag::Blue,
        },
        Highlight {
            label: "10 Travelers",
            icon: IconTag::Users,
            color: ColorTag::Emerald,
        },
        Highlight {
            label: "Premium Activities",
            icon: IconTag::Ticket,
            color: ColorTag::Purple,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_matches_breakdown() {
        assert_eq!(TRIP.cost_sum(), TRIP.details.grand_total);
    }

    #[test]
    fn test_day_costs_match_activities_item() {
        let activities = TRIP
            .costs
            .iter()
            .find(|c| c.name.starts_with("Activities"))
            .unwrap();
        assert_eq!(TRIP.day_cost_sum(), activities.value);
        assert_eq!(TRIP.day_cost_sum(), 276700);
    }

    #[test]
    fn test_hotel_total_matches_hotel_item() {
        let hotel = TRIP.costs.iter().find(|c| c.name.starts_with("Hotel")).unwrap();
        assert_eq!(TRIP.accommodation.total, hotel.value);
    }

    #[test]
    fn test_days_unique_and_ascending() {
        assert_eq!(TRIP.days.len(), 6);
        assert!(TRIP.days.windows(2).all(|w| w[0].day < w[1].day));
        assert!(TRIP.days.iter().all(|d| d.day > 0));
    }

    #[test]
    fn test_no_negative_amounts() {
        assert!(TRIP.details.grand_total >= 0);
        assert!(TRIP.costs.iter().all(|c| c.value >= 0));
        assert!(TRIP.days.iter().all(|d| d.cost >= 0));
    }

    #[test]
    fn test_highlights_non_empty() {
        assert!(TRIP.days.iter().all(|d| !d.highlights.is_empty()));
    }

    #[test]
    fn test_tags_serialize_as_tokens() {
        let text = toml::to_string(&TRIP).unwrap();
        assert!(text.contains("color = \"gold\""));
        assert!(text.contains("icon = \"arrow-right\""));
        assert!(text.contains("grand_total = 860490"));
    }

    #[test]
    fn test_flight_routes_parse() {
        assert!(TRIP.flights.outbound.endpoints().is_some());
        assert!(TRIP.flights.inbound.endpoints().is_some());
    }
}
