// Travel experience curation keyed by destination, budget and party

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TravelParams {
    pub destination_type: String,
    #[serde(default = "default_budget_range")]
    pub budget_range: String,
    #[serde(default = "default_travel_style")]
    pub travel_style: String,
}

fn default_budget_range() -> String {
    "mid-range".to_string()
}

fn default_travel_style() -> String {
    "couple".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Beach,
    City,
    Mountains,
    Cultural,
    Adventure,
}

impl Choice for Destination {
    const ALL: &'static [Self] = &[
        Self::Beach,
        Self::City,
        Self::Mountains,
        Self::Cultural,
        Self::Adventure,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::City => "city",
            Self::Mountains => "mountains",
            Self::Cultural => "cultural",
            Self::Adventure => "adventure",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Mountains => &["mountain"],
            Self::Cultural => &["culture"],
            Self::Beach => &["beaches", "island"],
            _ => &[],
        }
    }
}

struct DestinationGuide {
    trending: &'static str,
    emerging: &'static str,
    budget_friendly: &'static str,
    experiences: [&'static str; 5],
}

impl Destination {
    fn guide(self) -> DestinationGuide {
        match self {
            Self::Beach => DestinationGuide {
                trending: "Maldives, Bali, Costa Rica, Greek Islands",
                emerging: "Zanzibar, Seychelles, Philippines, Mexico",
                budget_friendly: "Thailand, Vietnam, Portugal, Croatia",
                experiences: [
                    "Snorkeling or diving",
                    "Sunset beach walks",
                    "Local seafood dining",
                    "Water sports activities",
                    "Island hopping tours",
                ],
            },
            Self::City => DestinationGuide {
                trending: "Tokyo, Singapore, Dubai, Barcelona",
                emerging: "Seoul, Istanbul, Lisbon, Budapest",
                budget_friendly: "Prague, Warsaw, Krakow, Belgrade",
                experiences: [
                    "Walking tours of historic districts",
                    "Local food markets and street food",
                    "Museum and cultural site visits",
                    "Nightlife and entertainment",
                    "Shopping in local markets",
                ],
            },
            Self::Mountains => DestinationGuide {
                trending: "Swiss Alps, Canadian Rockies, New Zealand",
                emerging: "Georgia (country), Armenia, Kyrgyzstan",
                budget_friendly: "Nepal, India, Peru, Bolivia",
                experiences: [
                    "Hiking and trekking",
                    "Scenic drives and viewpoints",
                    "Wildlife watching",
                    "Local village visits",
                    "Adventure sports (skiing, climbing)",
                ],
            },
            Self::Cultural => DestinationGuide {
                trending: "Japan, Morocco, India, Egypt",
                emerging: "Uzbekistan, Iran, Ethiopia, Myanmar",
                budget_friendly: "Cambodia, Laos, Sri Lanka, Nepal",
                experiences: [
                    "Historical site visits",
                    "Local festival attendance",
                    "Traditional cooking classes",
                    "Cultural performance shows",
                    "Local artisan workshops",
                ],
            },
            Self::Adventure => DestinationGuide {
                trending: "Iceland, Patagonia, Alaska, New Zealand",
                emerging: "Mongolia, Namibia, Madagascar, Borneo",
                budget_friendly: "Nepal, Peru, Bolivia, Guatemala",
                experiences: [
                    "Outdoor adventure activities",
                    "Wildlife safaris",
                    "Extreme sports",
                    "Remote area exploration",
                    "Cultural immersion experiences",
                ],
            },
        }
    }

    fn heading(self) -> String {
        format!("{} Destinations", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TravelStyle {
    Solo,
    #[default]
    Couple,
    Family,
    Group,
}

impl Choice for TravelStyle {
    const ALL: &'static [Self] = &[Self::Solo, Self::Couple, Self::Family, Self::Group];

    fn key(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Group => "group",
        }
    }
}

fn recommended_places(destination: Destination, style: TravelStyle) -> &'static str {
    use Destination::*;
    use TravelStyle::*;
    match (destination, style) {
        (Beach, Solo) => "Bali (Indonesia), Costa Rica, Thailand",
        (Beach, Couple) => "Maldives, Seychelles, Greek Islands",
        (Beach, Family) => "Hawaii, Florida Keys, Gold Coast (Australia)",
        (Beach, Group) => "Mexico, Dominican Republic, Philippines",
        (City, Solo) => "Tokyo, Singapore, Amsterdam",
        (City, Couple) => "Paris, Rome, Barcelona",
        (City, Family) => "London, New York, Toronto",
        (City, Group) => "Berlin, Prague, Budapest",
        (Mountains, Solo) => "Switzerland, New Zealand, Canada",
        (Mountains, Couple) => "Austrian Alps, French Alps, Japan",
        (Mountains, Family) => "Colorado (USA), Banff (Canada), Switzerland",
        (Mountains, Group) => "Nepal, Peru, Bolivia",
        (Cultural, Solo) => "Japan, Morocco, India",
        (Cultural, Couple) => "Italy, Greece, Turkey",
        (Cultural, Family) => "England, France, Germany",
        (Cultural, Group) => "Thailand, Vietnam, Cambodia",
        (Adventure, Solo) => "Iceland, New Zealand, Costa Rica",
        (Adventure, Couple) => "Patagonia, Alaska, Norway",
        (Adventure, Family) => "Costa Rica, New Zealand, Canada",
        (Adventure, Group) => "Nepal, Peru, Bolivia",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Budget {
    Budget,
    #[default]
    MidRange,
    Luxury,
}

impl Choice for Budget {
    const ALL: &'static [Self] = &[Self::Budget, Self::MidRange, Self::Luxury];

    fn key(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::MidRange => &["mid range", "midrange", "moderate"],
            Self::Budget => &["cheap", "backpacker"],
            Self::Luxury => &["premium"],
        }
    }
}

struct BudgetBreakdown {
    per_person: &'static str,
    accommodation: &'static str,
    food: &'static str,
    activities: &'static str,
    transportation: &'static str,
    total: &'static str,
}

impl Budget {
    fn breakdown(self) -> BudgetBreakdown {
        match self {
            Self::Budget => BudgetBreakdown {
                per_person: "$1,000-2,000 per person",
                accommodation: "$30-80/night",
                food: "$15-30/day",
                activities: "$20-50/day",
                transportation: "$10-30/day",
                total: "$75-190/day",
            },
            Self::MidRange => BudgetBreakdown {
                per_person: "$2,000-5,000 per person",
                accommodation: "$80-200/night",
                food: "$30-80/day",
                activities: "$50-150/day",
                transportation: "$30-80/day",
                total: "$190-510/day",
            },
            Self::Luxury => BudgetBreakdown {
                per_person: "$5,000+ per person",
                accommodation: "$200-500+/night",
                food: "$80-200+/day",
                activities: "$150-500+/day",
                transportation: "$80-200+/day",
                total: "$510-1,400+/day",
            },
        }
    }
}

pub struct TravelCurator;

impl Advisor for TravelCurator {
    type Params = TravelParams;

    const NAME: &'static str = "travel_curator";
    const DESCRIPTION: &'static str =
        "Curate travel experiences and predict trending destinations";
    const USE_WHEN: &'static str =
        "When you want to plan unique travel experiences or discover trending destinations";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "destination_type",
                "Destination type: 'beach', 'city', 'mountains', 'cultural', 'adventure'",
            ),
            ParamSpec::optional(
                "budget_range",
                "Budget range: 'budget', 'mid-range', 'luxury'",
                "mid-range",
            ),
            ParamSpec::optional(
                "travel_style",
                "Travel style: 'solo', 'couple', 'family', 'group'",
                "couple",
            ),
        ];
        PARAMS
    }

    fn generate(params: &TravelParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let destination: Option<Destination> =
            resolver.required("destination_type", &params.destination_type);
        let budget: Budget = resolver.optional("budget_range", &params.budget_range);
        let style: TravelStyle = resolver.optional("travel_style", &params.travel_style);

        let selected: &[Destination] = match &destination {
            Some(d) => std::slice::from_ref(d),
            None => Destination::ALL,
        };

        let mut trends = Section::new(
            "travel_trends",
            "🚀",
            format!("Travel Trends for {}", ctx.year()),
        )
        .subheading("Hot Destination Categories");
        let mut recommendations = Section::new(
            "recommendations",
            "🎯",
            "Personalized Travel Recommendations",
        )
        .subheading(format!(
            "{} Destinations for {} Travel",
            capitalize(&params.destination_type),
            style.label()
        ));
        let mut experiences = Section::new("experiences", "🎯", "Experience Curation")
            .subheading("Must-Have Experiences by Destination Type");

        for &d in selected {
            let guide = d.guide();
            trends = trends.label(d.heading()).facts(vec![
                fact("Trending", guide.trending),
                fact("Emerging", guide.emerging),
                fact("Budget-friendly", guide.budget_friendly),
            ]);
            recommendations = recommendations
                .label(d.heading())
                .facts(vec![fact(style.label(), recommended_places(d, style))]);
            experiences = experiences
                .label(d.heading())
                .bullets(guide.experiences.iter().copied());
        }

        let costs = budget.breakdown();

        AdviceBundle::new(Self::NAME, "Travel Experience Curator & Destination Predictor")
            .section(overview(
                "travel_analysis",
                "✈️",
                "Travel Analysis",
                vec![
                    fact("Destination Type", capitalize(&params.destination_type)),
                    fact("Budget Range", capitalize(&params.budget_range)),
                    fact("Travel Style", capitalize(&params.travel_style)),
                ],
                ctx,
            ))
            .section(trends)
            .section(recommendations)
            .section(
                Section::new("budget_planning", "💰", "Budget Planning")
                    .subheading(format!("{} Budget Breakdown", budget.label()))
                    .label(format!("{} ({})", budget.label(), costs.per_person))
                    .facts(vec![
                        fact("Accommodation", costs.accommodation),
                        fact("Food", costs.food),
                        fact("Activities", costs.activities),
                        fact("Transportation", costs.transportation),
                        fact("Total", costs.total),
                    ])
                    .subheading("Money-Saving Tips")
                    .numbered([
                        "**Travel off-season** for better prices",
                        "**Book flights early** (3-6 months ahead)",
                        "**Use budget airlines** and alternative airports",
                        "**Stay in hostels** or vacation rentals",
                        "**Eat local food** instead of tourist restaurants",
                        "**Use public transportation** when possible",
                        "**Book activities in advance** for discounts",
                        "**Travel with a group** to split costs",
                    ]),
            )
            .section(
                Section::new("planning_timeline", "📅", "Trip Planning Timeline")
                    .subheading("Pre-Trip Planning (3-6 months)")
                    .numbered([
                        "**Research destinations** and create shortlist",
                        "**Check visa requirements** and travel restrictions",
                        "**Book flights** for best prices",
                        "**Reserve accommodations** for popular destinations",
                        "**Plan major activities** and book in advance",
                        "**Get travel insurance** and necessary vaccinations",
                        "**Research local customs** and cultural etiquette",
                    ])
                    .subheading("Last-Minute Planning (1-2 weeks)")
                    .numbered([
                        "**Confirm all bookings** and reservations",
                        "**Pack appropriately** for destination and activities",
                        "**Download offline maps** and translation apps",
                        "**Notify bank** of travel plans",
                        "**Make copies** of important documents",
                        "**Check weather** and pack accordingly",
                        "**Plan airport transfers** and transportation",
                    ]),
            )
            .section(experiences)
            .section(Section::new("action_plan", "🚀", "Action Plan").numbered([
                "**Define your travel goals** and preferences",
                "**Research potential destinations** thoroughly",
                "**Set realistic budget** and timeline",
                "**Book major components** early for best prices",
                "**Plan detailed itinerary** with flexibility",
                "**Prepare for cultural differences** and language barriers",
                "**Pack smart** and travel light",
                "**Stay open to unexpected experiences** and changes",
            ]))
            .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
                "**Be flexible** with dates for better prices",
                "**Research local customs** and respect cultural differences",
                "**Learn basic phrases** in local language",
                "**Stay connected** with family/friends back home",
                "**Keep emergency contacts** and important documents safe",
                "**Travel light** - you'll thank yourself later",
                "**Try local food** - it's part of the experience",
                "**Take photos** but also live in the moment",
                "**Be respectful** of local people and environment",
                "**Have backup plans** for weather or other issues",
                "**Travel insurance** is worth the investment",
                "**Keep a travel journal** to remember your experiences",
            ]))
            .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap())
    }

    fn params(destination: &str, budget: &str, style: &str) -> TravelParams {
        TravelParams {
            destination_type: destination.to_string(),
            budget_range: budget.to_string(),
            travel_style: style.to_string(),
        }
    }

    #[test]
    fn test_city_family_recommendation() {
        let bundle = TravelCurator::generate(&params("city", "luxury", "family"), &ctx());
        let recs = bundle.get("recommendations").unwrap().text();
        assert!(recs.contains("London, New York, Toronto"));
        assert!(!recs.contains("Beach Destinations"));
        let budget = bundle.get("budget_planning").unwrap().text();
        assert!(budget.contains("**Total:** $510-1,400+/day"));
    }

    #[test]
    fn test_budget_aliases() {
        assert_eq!(Budget::parse("Mid Range"), Some(Budget::MidRange));
        assert_eq!(Budget::parse("MID-RANGE"), Some(Budget::MidRange));
        assert_eq!(Budget::MidRange.label(), "Mid-range");
    }

    #[test]
    fn test_unknown_destination_covers_every_type() {
        let bundle = TravelCurator::generate(&params("space station", "budget", "solo"), &ctx());
        let experiences = bundle.get("experiences").unwrap().text();
        assert!(experiences.contains("Snorkeling or diving"));
        assert!(experiences.contains("Wildlife safaris"));
        let recs = bundle.get("recommendations").unwrap().text();
        assert!(recs.contains("Bali (Indonesia), Costa Rica, Thailand"));
        assert!(recs.contains("Iceland, New Zealand, Costa Rica"));
        assert_eq!(bundle.notes.len(), 1);
    }

    #[test]
    fn test_unknown_style_defaults_to_couple() {
        let bundle = TravelCurator::generate(&params("beach", "mid-range", "with my cat"), &ctx());
        assert!(bundle
            .get("recommendations")
            .unwrap()
            .text()
            .contains("Maldives, Seychelles, Greek Islands"));
        assert_eq!(bundle.notes.len(), 1);
    }
}
