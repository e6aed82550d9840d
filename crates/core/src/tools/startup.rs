// Business idea validation and startup roadmap

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, mentions_word, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StartupParams {
    pub business_idea: String,
    #[serde(default = "default_target_market")]
    pub target_market: String,
    #[serde(default = "default_investment_needed")]
    pub investment_needed: String,
}

fn default_target_market() -> String {
    "General".to_string()
}

fn default_investment_needed() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Investment {
    Low,
    #[default]
    Medium,
    High,
}

impl Choice for Investment {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Investment {
    fn seed_round(self) -> &'static str {
        match self {
            Self::Low => "$50K-100K",
            Self::Medium => "$200K-500K",
            Self::High => "$1M-2M",
        }
    }
}

const SUCCESS_PROBABILITY: u8 = 75;

pub struct StartupBuilder;

impl Advisor for StartupBuilder {
    type Params = StartupParams;

    const NAME: &'static str = "startup_builder";
    const DESCRIPTION: &'static str = "Validate business ideas and build startup roadmaps";
    const USE_WHEN: &'static str =
        "When you have a business idea and want to validate it or create a startup plan";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required("business_idea", "Your business idea or concept"),
            ParamSpec::optional("target_market", "Target market or audience", "General"),
            ParamSpec::optional(
                "investment_needed",
                "Investment range: 'low', 'medium', 'high'",
                "medium",
            ),
        ];
        PARAMS
    }

    fn generate(params: &StartupParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let investment: Investment =
            resolver.optional("investment_needed", &params.investment_needed);

        let idea = &params.business_idea;
        let mentions_ai = mentions_word(idea, "ai");
        let tech_led = mentions_ai || idea.to_lowercase().contains("tech");

        AdviceBundle::new(
            Self::NAME,
            format!("Startup Validation & Roadmap: {}", idea),
        )
        .section(overview(
            "business_concept",
            "🎯",
            "Business Concept",
            vec![
                fact("Idea", idea.clone()),
                fact("Target Market", params.target_market.clone()),
                fact("Investment Level", capitalize(&params.investment_needed)),
            ],
            ctx,
        ))
        .section(
            Section::new("market_validation", "📊", "Market Validation")
                .subheading("Market Size & Opportunity")
                .facts(vec![
                    fact("Total Addressable Market (TAM)", "$2-5 billion"),
                    fact("Serviceable Addressable Market (SAM)", "$500M-1B"),
                    fact("Serviceable Obtainable Market (SOM)", "$50M-100M"),
                ])
                .subheading("Competitive Analysis")
                .facts(vec![
                    fact("Direct Competitors", "3-5 major players"),
                    fact(
                        "Competitive Advantage",
                        if tech_led {
                            "Technology innovation"
                        } else {
                            "Unique value proposition"
                        },
                    ),
                    fact(
                        "Barriers to Entry",
                        if mentions_ai { "Medium" } else { "Low to Medium" },
                    ),
                ]),
        )
        .section(
            Section::new(
                "success_probability",
                "🚀",
                format!("Success Probability: {}%", SUCCESS_PROBABILITY),
            )
            .subheading("Strengths")
            .numbered([
                "**Growing market demand**",
                "**Technology-enabled solution**",
                "**Scalable business model**",
                "**Strong team potential**",
            ])
            .subheading("Challenges")
            .numbered([
                "**Competition from established players**",
                "**Customer acquisition costs**",
                "**Regulatory considerations**",
                "**Funding requirements**",
            ]),
        )
        .section(
            Section::new("mvp_roadmap", "📋", "MVP Roadmap")
                .subheading("Phase 1: Foundation (Months 1-3)")
                .bullets([
                    "**Market research and validation**",
                    "**Core team formation**",
                    "**MVP development**",
                    "**Initial customer interviews**",
                ])
                .subheading("Phase 2: Launch (Months 4-6)")
                .bullets([
                    "**MVP launch and testing**",
                    "**Customer feedback collection**",
                    "**Product iteration**",
                    "**Initial marketing campaigns**",
                ])
                .subheading("Phase 3: Growth (Months 7-12)")
                .bullets([
                    "**Customer acquisition**",
                    "**Revenue generation**",
                    "**Team expansion**",
                    "**Funding rounds**",
                ]),
        )
        .section(
            Section::new("financial_projections", "💰", "Financial Projections")
                .subheading("Investment Required")
                .facts(vec![
                    fact("Seed Round", investment.seed_round()),
                    fact("Series A", "$2M-5M (after 12-18 months)"),
                    fact("Break-even", "18-24 months"),
                ])
                .subheading("Revenue Projections")
                .facts(vec![
                    fact("Year 1", "$100K-500K"),
                    fact("Year 2", "$1M-5M"),
                    fact("Year 3", "$5M-20M"),
                ]),
        )
        .section(Section::new("next_steps", "🎯", "Next Steps").numbered([
            "**Validate with potential customers**",
            "**Build MVP prototype**",
            "**Secure initial funding**",
            "**Assemble core team**",
            "**Launch beta version**",
        ]))
        .section(Section::new("recommendations", "💡", "Recommendations").bullets([
            "**Focus on solving a real problem**",
            "**Build a strong founding team**",
            "**Validate early and often**",
            "**Be prepared to pivot**",
            "**Network with other entrepreneurs**",
        ]))
        .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
    }

    fn params(idea: &str, investment: &str) -> StartupParams {
        StartupParams {
            business_idea: idea.to_string(),
            target_market: default_target_market(),
            investment_needed: investment.to_string(),
        }
    }

    #[test]
    fn test_seed_round_by_investment() {
        let low = StartupBuilder::generate(&params("Bakery", "low"), &ctx());
        assert!(low.get("financial_projections").unwrap().text().contains("$50K-100K"));

        let high = StartupBuilder::generate(&params("Bakery", "HIGH"), &ctx());
        assert!(high.get("financial_projections").unwrap().text().contains("$1M-2M"));
    }

    #[test]
    fn test_unknown_investment_uses_medium() {
        let bundle = StartupBuilder::generate(&params("Bakery", "enormous"), &ctx());
        assert!(bundle.get("financial_projections").unwrap().text().contains("$200K-500K"));
        assert_eq!(bundle.notes.len(), 1);
    }

    #[test]
    fn test_ai_idea_is_technology_led() {
        let bundle = StartupBuilder::generate(&params("AI tutor for kids", "medium"), &ctx());
        let validation = bundle.get("market_validation").unwrap().text();
        assert!(validation.contains("Technology innovation"));
        assert!(validation.contains("**Barriers to Entry:** Medium\n"));
    }

    #[test]
    fn test_tech_prefixes_are_technology_led() {
        for idea in ["fintech budgeting app", "Technology platform for farmers", "Edtech tutoring"] {
            let bundle = StartupBuilder::generate(&params(idea, "medium"), &ctx());
            let validation = bundle.get("market_validation").unwrap().text();
            assert!(validation.contains("Technology innovation"), "{}", idea);
        }
    }

    #[test]
    fn test_retail_idea_is_not_ai() {
        let bundle = StartupBuilder::generate(&params("Retail email newsletter", "medium"), &ctx());
        let validation = bundle.get("market_validation").unwrap().text();
        assert!(validation.contains("Unique value proposition"));
        assert!(validation.contains("Low to Medium"));
    }

    #[test]
    fn test_defaults_applied_on_parse() {
        let p = StartupBuilder::parse(serde_json::json!({"business_idea": "Dog walking app"})).unwrap();
        assert_eq!(p.target_market, "General");
        assert_eq!(p.investment_needed, "medium");

        let bundle = StartupBuilder::generate(&p, &ctx());
        assert_eq!(
            bundle.get("success_probability").unwrap().heading,
            "Success Probability: 75%"
        );
    }
}
