// Influencer / brand collaboration matching

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InfluencerParams {
    pub influencer_type: String,
    #[serde(default = "default_niche")]
    pub niche: String,
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_niche() -> String {
    "lifestyle".to_string()
}

fn default_platform() -> String {
    "instagram".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tier {
    #[default]
    Micro,
    Macro,
    Mega,
}

impl Choice for Tier {
    const ALL: &'static [Self] = &[Self::Micro, Self::Macro, Self::Mega];

    fn key(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Macro => "macro",
            Self::Mega => "mega",
        }
    }
}

struct TierProfile {
    followers: &'static str,
    engagement: &'static str,
    average_cost: &'static str,
    best_for: &'static str,
    strengths: &'static str,
    collaborations: &'static str,
    base_rate: &'static str,
}

impl Tier {
    fn profile(self) -> TierProfile {
        match self {
            Self::Micro => TierProfile {
                followers: "1K-10K followers",
                engagement: "8-15%",
                average_cost: "$50-500 per post",
                best_for: "Local businesses, niche products",
                strengths: "High engagement, authentic audience",
                collaborations: "Product reviews, affiliate marketing",
                base_rate: "$100-500",
            },
            Self::Macro => TierProfile {
                followers: "10K-100K followers",
                engagement: "3-8%",
                average_cost: "$500-5,000 per post",
                best_for: "Growing brands, targeted campaigns",
                strengths: "Good reach, established audience",
                collaborations: "Sponsored posts, brand ambassadorships",
                base_rate: "$1,000-5,000",
            },
            Self::Mega => TierProfile {
                followers: "100K+ followers",
                engagement: "1-3%",
                average_cost: "$5,000-50,000 per post",
                best_for: "Large brands, mass awareness",
                strengths: "Massive reach, brand recognition",
                collaborations: "Major campaigns, product launches",
                base_rate: "$10,000-50,000",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InfluencerNiche {
    #[default]
    Lifestyle,
    Tech,
    Fashion,
    Food,
    Fitness,
}

impl Choice for InfluencerNiche {
    const ALL: &'static [Self] = &[
        Self::Lifestyle,
        Self::Tech,
        Self::Fashion,
        Self::Food,
        Self::Fitness,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Lifestyle => "lifestyle",
            Self::Tech => "tech",
            Self::Fashion => "fashion",
            Self::Food => "food",
            Self::Fitness => "fitness",
        }
    }
}

impl InfluencerNiche {
    fn brand_matches(self) -> [(&'static str, &'static str); 4] {
        match self {
            Self::Lifestyle => [
                ("Beauty brands", "Skincare, makeup, haircare"),
                ("Fashion brands", "Clothing, accessories, jewelry"),
                ("Wellness brands", "Supplements, fitness, mental health"),
                ("Home brands", "Decor, furniture, lifestyle products"),
            ],
            Self::Tech => [
                ("Gadget brands", "Smartphones, laptops, accessories"),
                ("Software brands", "Apps, tools, platforms"),
                ("Gaming brands", "Consoles, games, accessories"),
                ("Tech services", "VPN, cloud storage, productivity tools"),
            ],
            Self::Fashion => [
                ("Clothing brands", "Fast fashion, luxury, sustainable"),
                ("Accessories", "Bags, shoes, jewelry, watches"),
                ("Beauty brands", "Makeup, skincare, haircare"),
                ("Lifestyle brands", "Home decor, travel, wellness"),
            ],
            Self::Food => [
                ("Food brands", "Restaurants, delivery, meal kits"),
                ("Kitchen brands", "Appliances, cookware, gadgets"),
                ("Beverage brands", "Coffee, tea, smoothies, alcohol"),
                ("Health brands", "Supplements, superfoods, nutrition"),
            ],
            Self::Fitness => [
                ("Fitness brands", "Equipment, apparel, supplements"),
                ("Wellness brands", "Apps, services, products"),
                ("Nutrition brands", "Meal plans, supplements, snacks"),
                ("Lifestyle brands", "Activewear, accessories, services"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InfluencerPlatform {
    #[default]
    Instagram,
    TikTok,
    YouTube,
}

impl Choice for InfluencerPlatform {
    const ALL: &'static [Self] = &[Self::Instagram, Self::TikTok, Self::YouTube];

    fn key(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
        }
    }
}

impl InfluencerPlatform {
    fn preferred_formats(self) -> &'static str {
        match self {
            Self::Instagram => "Reels, Stories and carousel posts",
            Self::TikTok => "Short videos riding trending sounds",
            Self::YouTube => "Dedicated reviews and integrated mid-roll mentions",
        }
    }
}

const SUCCESS_PROBABILITY: u8 = 85;

fn tier_block(section: Section, tier: Tier) -> Section {
    let p = tier.profile();
    section
        .subheading(format!("{} Influencers ({})", tier.label(), p.followers))
        .facts(vec![
            fact("Engagement Rate", p.engagement),
            fact("Average Cost", p.average_cost),
            fact("Best For", p.best_for),
            fact("Strengths", p.strengths),
            fact("Collaboration Types", p.collaborations),
        ])
}

pub struct InfluencerMatcher;

impl Advisor for InfluencerMatcher {
    type Params = InfluencerParams;

    const NAME: &'static str = "influencer_matcher";
    const DESCRIPTION: &'static str =
        "Match influencers with brands and predict collaboration success";
    const USE_WHEN: &'static str =
        "When you want to find brand collaborations or match influencers with opportunities";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "influencer_type",
                "Type of influencer: 'micro', 'macro', 'mega'",
            ),
            ParamSpec::optional(
                "niche",
                "Content niche: 'lifestyle', 'tech', 'fashion', 'food', 'fitness'",
                "lifestyle",
            ),
            ParamSpec::optional(
                "platform",
                "Primary platform: 'instagram', 'tiktok', 'youtube'",
                "instagram",
            ),
        ];
        PARAMS
    }

    fn generate(params: &InfluencerParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let tier: Option<Tier> = resolver.required("influencer_type", &params.influencer_type);
        let niche: InfluencerNiche = resolver.optional("niche", &params.niche);
        let platform: InfluencerPlatform = resolver.optional("platform", &params.platform);

        let mut categories = Section::new("influencer_categories", "📊", "Influencer Categories");
        let mut pricing = Section::new("pricing_strategy", "💰", "Pricing Strategy").subheading(
            format!("{} Influencer Pricing", capitalize(&params.influencer_type)),
        );
        match tier {
            Some(t) => {
                categories = tier_block(categories, t);
                pricing = pricing.facts(vec![fact(
                    "Base Rate",
                    format!("{} per post", t.profile().base_rate),
                )]);
            }
            None => {
                for &t in Tier::ALL {
                    categories = tier_block(categories, t);
                }
                pricing = pricing.facts(
                    Tier::ALL
                        .iter()
                        .map(|t| {
                            fact(
                                format!("{} Base Rate", t.label()),
                                format!("{} per post", t.profile().base_rate),
                            )
                        })
                        .collect(),
                );
            }
        }
        let pricing = pricing
            .label("Additional Factors")
            .facts(vec![
                fact("Engagement Rate", "+10-30% for high engagement"),
                fact("Platform", "+20-50% for multiple platforms"),
                fact("Exclusivity", "+50-100% for exclusive partnerships"),
                fact("Content Quality", "+25-50% for professional content"),
                fact("Audience Demographics", "+15-40% for target audience match"),
            ])
            .subheading("Collaboration Packages")
            .numbered([
                "**Single Post:** One-time sponsored content",
                "**Series (3-5 posts):** Discounted rate for multiple posts",
                "**Monthly Partnership:** Regular content creation",
                "**Brand Ambassadorship:** Long-term exclusive partnership",
                "**Product Launch:** Dedicated campaign support",
            ]);

        AdviceBundle::new(Self::NAME, "Influencer & Brand Collaboration Matcher")
            .section(overview(
                "influencer_analysis",
                "👥",
                "Influencer Analysis",
                vec![
                    fact(
                        "Type",
                        format!("{} Influencer", capitalize(&params.influencer_type)),
                    ),
                    fact("Niche", capitalize(&params.niche)),
                    fact("Platform", capitalize(&params.platform)),
                ],
                ctx,
            ))
            .section(categories)
            .section(
                Section::new("brand_matching", "🎯", "Brand Matching Strategy")
                    .subheading(format!(
                        "Perfect Brand Matches for {}",
                        capitalize(&params.niche)
                    ))
                    .facts(
                        niche
                            .brand_matches()
                            .iter()
                            .map(|(label, value)| fact(*label, *value))
                            .collect(),
                    )
                    .subheading(format!("{} Content Formats", platform.label()))
                    .bullets([platform.preferred_formats()]),
            )
            .section(pricing)
            .section(
                Section::new("success_prediction", "📈", "Success Prediction")
                    .subheading("Collaboration Success Factors")
                    .numbered([
                        "**Audience Alignment:** 40% importance",
                        "**Content Quality:** 25% importance",
                        "**Engagement Rate:** 20% importance",
                        "**Brand Safety:** 10% importance",
                        "**Platform Fit:** 5% importance",
                    ])
                    .subheading(format!("Success Probability: {}%", SUCCESS_PROBABILITY))
                    .label("High Success Indicators")
                    .bullets([
                        "✅ Authentic audience engagement",
                        "✅ Relevant content niche",
                        "✅ Professional communication",
                        "✅ Consistent posting schedule",
                        "✅ Positive brand reputation",
                    ]),
            )
            .section(
                Section::new("action_plan", "🚀", "Action Plan")
                    .subheading("For Brands")
                    .numbered([
                        "**Define campaign goals** and target audience",
                        "**Research potential influencers** in your niche",
                        "**Analyze engagement rates** and audience quality",
                        "**Reach out professionally** with clear proposals",
                        "**Negotiate fair compensation** and deliverables",
                        "**Provide creative freedom** while maintaining brand guidelines",
                        "**Track performance** and measure ROI",
                        "**Build long-term relationships** with successful partners",
                    ])
                    .subheading("For Influencers")
                    .numbered([
                        "**Define your niche** and target audience",
                        "**Create media kit** with rates and statistics",
                        "**Build professional relationships** with brands",
                        "**Deliver high-quality content** consistently",
                        "**Track your performance** and engagement",
                        "**Negotiate fair compensation** for your value",
                        "**Maintain authenticity** in brand partnerships",
                        "**Diversify income streams** beyond sponsored posts",
                    ]),
            )
            .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
                "**Authenticity wins** - only partner with brands you genuinely like",
                "**Quality over quantity** - better to have fewer, high-quality partnerships",
                "**Track everything** - measure performance and ROI",
                "**Build relationships** - long-term partnerships are more valuable",
                "**Stay professional** - clear communication and timely delivery",
                "**Know your worth** - don't undervalue your influence",
                "**Be selective** - not every brand partnership is worth it",
                "**Stay true to your audience** - they trust your recommendations",
            ]))
            .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 5, 5).unwrap())
    }

    fn params(kind: &str, niche: &str) -> InfluencerParams {
        InfluencerParams {
            influencer_type: kind.to_string(),
            niche: niche.to_string(),
            platform: default_platform(),
        }
    }

    #[test]
    fn test_macro_base_rate() {
        let bundle = InfluencerMatcher::generate(&params("macro", "tech"), &ctx());
        let pricing = bundle.get("pricing_strategy").unwrap().text();
        assert!(pricing.contains("**Base Rate:** $1,000-5,000 per post"));
        let categories = bundle.get("influencer_categories").unwrap().text();
        assert!(categories.contains("Macro Influencers (10K-100K followers)"));
        assert!(!categories.contains("Mega Influencers"));
        assert!(bundle
            .get("brand_matching")
            .unwrap()
            .text()
            .contains("VPN, cloud storage"));
    }

    #[test]
    fn test_unknown_tier_lists_all_rates() {
        let bundle = InfluencerMatcher::generate(&params("nano", "fitness"), &ctx());
        let pricing = bundle.get("pricing_strategy").unwrap().text();
        assert!(pricing.contains("Micro Base Rate"));
        assert!(pricing.contains("Mega Base Rate"));
        assert_eq!(bundle.notes.len(), 1);
    }

    #[test]
    fn test_success_probability_is_fixed() {
        let bundle = InfluencerMatcher::generate(&params("mega", "food"), &ctx());
        assert!(bundle
            .get("success_prediction")
            .unwrap()
            .text()
            .contains("Success Probability: 85%"));
    }
}
