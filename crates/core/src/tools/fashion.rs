// Fashion trend predictions and style recommendations

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FashionParams {
    pub style_preference: String,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_season")]
    pub season: String,
}

fn default_occasion() -> String {
    "casual".to_string()
}

fn default_season() -> String {
    "summer".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Casual,
    Formal,
    Streetwear,
    Vintage,
}

impl Choice for Style {
    const ALL: &'static [Self] = &[Self::Casual, Self::Formal, Self::Streetwear, Self::Vintage];

    fn key(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Streetwear => "streetwear",
            Self::Vintage => "vintage",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Streetwear => &["street"],
            Self::Vintage => &["retro"],
            _ => &[],
        }
    }
}

impl Style {
    fn top_picks(self) -> &'static str {
        match self {
            Self::Casual => "Oversized blazers, wide-leg pants, chunky sneakers",
            Self::Formal => "Tailored suits, statement accessories, classic pumps",
            Self::Streetwear => "Graphic tees, cargo pants, platform sneakers",
            Self::Vintage => "High-waisted jeans, retro prints, vintage accessories",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Occasion {
    Work,
    Party,
    #[default]
    Casual,
    Formal,
}

impl Choice for Occasion {
    const ALL: &'static [Self] = &[Self::Work, Self::Party, Self::Casual, Self::Formal];

    fn key(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Party => "party",
            Self::Casual => "casual",
            Self::Formal => "formal",
        }
    }
}

impl Occasion {
    fn outfit(self) -> &'static str {
        match self {
            Self::Work => "Tailored blazer + wide-leg pants + loafers",
            Self::Party => "Statement dress + bold accessories + heels",
            Self::Casual => "Oversized sweater + jeans + sneakers",
            Self::Formal => "Classic suit + silk shirt + oxfords",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Fall,
    Winter,
}

impl Choice for Season {
    const ALL: &'static [Self] = &[Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    fn key(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Fall => &["autumn"],
            _ => &[],
        }
    }
}

impl Season {
    fn palette(self) -> &'static str {
        match self {
            Self::Spring | Self::Summer => "Light, bright colors",
            Self::Fall | Self::Winter => "Rich, deep colors",
        }
    }
}

const HOT_TRENDS: &[&str] = &[
    "**Sustainable Fashion:** Eco-friendly materials, upcycled clothing",
    "**Tech-Integrated Wear:** Smart fabrics, LED accessories",
    "**Gender-Fluid Fashion:** Unisex designs, inclusive sizing",
    "**Vintage Revival:** 90s and Y2K aesthetics",
    "**Minimalist Luxury:** Quality over quantity, timeless pieces",
];

pub struct FashionPredictor;

impl Advisor for FashionPredictor {
    type Params = FashionParams;

    const NAME: &'static str = "fashion_predictor";
    const DESCRIPTION: &'static str = "Predict fashion trends and suggest style recommendations";
    const USE_WHEN: &'static str =
        "When you want to stay ahead of fashion trends or get style advice";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "style_preference",
                "Your style preference: 'casual', 'formal', 'streetwear', 'vintage'",
            ),
            ParamSpec::optional(
                "occasion",
                "Occasion: 'work', 'party', 'casual', 'formal'",
                "casual",
            ),
            ParamSpec::optional(
                "season",
                "Season: 'spring', 'summer', 'fall', 'winter'",
                "summer",
            ),
        ];
        PARAMS
    }

    fn generate(params: &FashionParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let style: Option<Style> = resolver.required("style_preference", &params.style_preference);
        let occasion: Occasion = resolver.optional("occasion", &params.occasion);
        let season: Season = resolver.optional("season", &params.season);

        let mut recommendations = Section::new("recommendations", "🎯", "Personalized Recommendations")
            .subheading(format!(
                "For {} Style",
                capitalize(&params.style_preference)
            ))
            .label("Top Picks");
        recommendations = match style {
            Some(style) => recommendations.facts(vec![fact(style.label(), style.top_picks())]),
            None => recommendations.facts(
                Style::ALL
                    .iter()
                    .map(|s| fact(s.label(), s.top_picks()))
                    .collect(),
            ),
        };
        let recommendations = recommendations
            .subheading(format!("{} Outfit Ideas", occasion.label()))
            .numbered([format!("**{}:** {}", occasion.label(), occasion.outfit())]);

        AdviceBundle::new(Self::NAME, "Fashion Trend Predictor & Style Guide")
            .section(overview(
                "style_analysis",
                "👗",
                "Style Analysis",
                vec![
                    fact("Your Preference", capitalize(&params.style_preference)),
                    fact("Occasion", capitalize(&params.occasion)),
                    fact("Season", capitalize(&params.season)),
                ],
                ctx,
            ))
            .section(
                Section::new(
                    "trending_styles",
                    "🚀",
                    format!("Trending Styles for {} {}", season.label(), ctx.year()),
                )
                .subheading("Hot Trends")
                .numbered(HOT_TRENDS.iter().copied())
                .subheading("Color Palette")
                .facts(vec![
                    fact("Primary Colors", "Earth tones, muted pastels"),
                    fact("Accent Colors", "Bold neons, metallic finishes"),
                    fact("Neutral Colors", "Cream, beige, charcoal"),
                    fact(format!("{} Tones", season.label()), season.palette()),
                ]),
            )
            .section(recommendations)
            .section(
                Section::new("trend_predictions", "📈", "Trend Predictions")
                    .subheading("Emerging Trends (Next 6 months)")
                    .numbered([
                        "**Digital Fashion:** Virtual clothing, NFT fashion",
                        "**Athleisure 2.0:** Performance wear meets style",
                        "**Micro-Trends:** Hyper-personalized fashion",
                        "**Circular Fashion:** Rental, resale, repair",
                    ])
                    .subheading("Investment Pieces")
                    .facts(vec![
                        fact("Timeless Blazer", "Versatile for all occasions"),
                        fact("Quality Denim", "Lasts years, never goes out of style"),
                        fact("Classic Handbag", "Investment piece that appreciates"),
                        fact("Statement Jewelry", "Adds personality to any outfit"),
                    ]),
            )
            .section(
                Section::new("shopping_strategy", "🛍️", "Shopping Strategy")
                    .subheading("Budget Allocation")
                    .facts(vec![
                        fact("70% Basics", "Quality essentials that last"),
                        fact("20% Trends", "Affordable trendy pieces"),
                        fact("10% Investment", "High-quality statement pieces"),
                    ])
                    .subheading("Sustainable Shopping")
                    .numbered([
                        "**Buy second-hand** for unique finds",
                        "**Support local designers**",
                        "**Choose quality over quantity**",
                        "**Rent for special occasions**",
                    ]),
            )
            .section(Section::new("style_tips", "💡", "Style Tips").bullets([
                "**Know your body type** and dress accordingly",
                "**Invest in good basics** that mix and match",
                "**Accessorize strategically** to change looks",
                "**Confidence is the best accessory**",
                "**Trends come and go, style is forever**",
            ]))
            .section(
                Section::new("color_analysis", "🎨", "Color Analysis").facts(vec![
                    fact("Spring/Summer", Season::Summer.palette()),
                    fact("Fall/Winter", Season::Winter.palette()),
                    fact("Year-round", "Neutrals, earth tones"),
                ]),
            )
            .section(
                Section::new("inspiration", "📱", "Social Media Inspiration").facts(vec![
                    fact("Instagram", "@fashionista, @styleblogger"),
                    fact("TikTok", "#fashiontrends, #styleinspo"),
                    fact("Pinterest", "Create mood boards for inspiration"),
                ]),
            )
            .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 11, 3).unwrap())
    }

    fn params(style: &str, occasion: &str, season: &str) -> FashionParams {
        FashionParams {
            style_preference: style.to_string(),
            occasion: occasion.to_string(),
            season: season.to_string(),
        }
    }

    #[test]
    fn test_streetwear_winter_has_recommendations_and_trends() {
        let bundle = FashionPredictor::generate(&params("streetwear", "casual", "winter"), &ctx());

        let recommendations = bundle.get("recommendations").unwrap();
        assert!(!recommendations.is_empty());
        assert!(recommendations.text().contains("Graphic tees, cargo pants"));
        assert!(recommendations.text().contains("Oversized sweater + jeans + sneakers"));
        // Only the requested style is listed
        assert!(!recommendations.text().contains("Tailored suits"));

        let trending = bundle.get("trending_styles").unwrap();
        assert!(!trending.is_empty());
        assert_eq!(trending.heading, "Trending Styles for Winter 2026");
        assert!(trending.text().contains("Rich, deep colors"));
        assert!(bundle.notes.is_empty());
    }

    #[test]
    fn test_unknown_style_lists_every_style() {
        let bundle = FashionPredictor::generate(&params("gothic", "party", "spring"), &ctx());
        let text = bundle.get("recommendations").unwrap().text();
        for style in Style::ALL {
            assert!(text.contains(style.top_picks()));
        }
        assert!(text.contains("For Gothic Style"));
        assert_eq!(bundle.notes.len(), 1);
    }

    #[test]
    fn test_color_analysis_keeps_year_round_guidance() {
        let bundle = FashionPredictor::generate(&params("vintage", "formal", "spring"), &ctx());
        let colors = bundle.get("color_analysis").unwrap().text();
        assert!(colors.contains("**Year-round:** Neutrals, earth tones"));
        assert!(colors.contains("**Fall/Winter:** Rich, deep colors"));
    }

    #[test]
    fn test_autumn_alias() {
        let bundle = FashionPredictor::generate(&params("vintage", "work", "Autumn"), &ctx());
        assert_eq!(
            bundle.get("trending_styles").unwrap().heading,
            "Trending Styles for Fall 2026"
        );
    }
}
