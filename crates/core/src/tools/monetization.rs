// Content monetization strategy keyed by platform and audience size

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MonetizationParams {
    pub content_type: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_audience_size")]
    pub audience_size: String,
}

fn default_platform() -> String {
    "youtube".to_string()
}

fn default_audience_size() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    YouTube,
    Instagram,
    TikTok,
    Blog,
}

impl Choice for Platform {
    const ALL: &'static [Self] = &[Self::YouTube, Self::Instagram, Self::TikTok, Self::Blog];

    fn key(self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::Blog => "blog",
        }
    }
}

impl Platform {
    fn best_posting_time(self) -> &'static str {
        match self {
            Self::YouTube => "7-9 PM",
            Self::Instagram => "12-3 PM",
            Self::TikTok => "6-10 PM",
            Self::Blog => "9-11 AM",
        }
    }

    fn content_length(self) -> &'static str {
        match self {
            Self::YouTube => "10-15 minutes",
            Self::Instagram => "30-60 seconds",
            Self::TikTok => "15-60 seconds",
            Self::Blog => "1500-2500 words",
        }
    }

    fn engagement_tactics(self) -> &'static str {
        match self {
            Self::YouTube => "Call-to-actions, end screens",
            Self::Instagram => "Stories, Reels, IGTV",
            Self::TikTok => "Trending sounds, challenges",
            Self::Blog => "Comments, social sharing",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudienceSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl Choice for AudienceSize {
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Revenue ranges in dollars for one audience tier
struct RevenueTable {
    ad_revenue_monthly: &'static str,
    sponsorship_per_post: &'static str,
    affiliate_monthly: &'static str,
    six_months: &'static str,
    twelve_months: &'static str,
}

impl AudienceSize {
    fn revenue(self) -> RevenueTable {
        match self {
            Self::Small => RevenueTable {
                ad_revenue_monthly: "$500-2K",
                sponsorship_per_post: "$1K-5K",
                affiliate_monthly: "$200-1K",
                six_months: "$2K-8K",
                twelve_months: "$5K-20K",
            },
            Self::Medium => RevenueTable {
                ad_revenue_monthly: "$2K-10K",
                sponsorship_per_post: "$5K-20K",
                affiliate_monthly: "$1K-5K",
                six_months: "$8K-30K",
                twelve_months: "$20K-80K",
            },
            Self::Large => RevenueTable {
                ad_revenue_monthly: "$10K-50K",
                sponsorship_per_post: "$20K-100K",
                affiliate_monthly: "$5K-25K",
                six_months: "$30K-150K",
                twelve_months: "$80K-300K",
            },
        }
    }
}

pub struct ContentMonetization;

impl Advisor for ContentMonetization {
    type Params = MonetizationParams;

    const NAME: &'static str = "content_monetization";
    const DESCRIPTION: &'static str =
        "Analyze content performance and optimize monetization strategies";
    const USE_WHEN: &'static str =
        "When you want to monetize your content or improve your content strategy";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "content_type",
                "Type of content: 'video', 'blog', 'social', 'podcast'",
            ),
            ParamSpec::optional(
                "platform",
                "Platform: 'youtube', 'instagram', 'tiktok', 'blog'",
                "youtube",
            ),
            ParamSpec::optional(
                "audience_size",
                "Current audience size: 'small', 'medium', 'large'",
                "medium",
            ),
        ];
        PARAMS
    }

    fn generate(params: &MonetizationParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let platform: Platform = resolver.optional("platform", &params.platform);
        let audience: AudienceSize = resolver.optional("audience_size", &params.audience_size);
        let revenue = audience.revenue();

        AdviceBundle::new(
            Self::NAME,
            format!(
                "Content Monetization Strategy: {} on {}",
                capitalize(&params.content_type),
                capitalize(&params.platform)
            ),
        )
        .section(overview(
            "current_analysis",
            "📊",
            "Current Analysis",
            vec![
                fact("Content Type", capitalize(&params.content_type)),
                fact("Platform", capitalize(&params.platform)),
                fact("Audience Size", capitalize(&params.audience_size)),
            ],
            ctx,
        ))
        .section(
            Section::new("monetization_opportunities", "💰", "Monetization Opportunities")
                .subheading("1. **Platform Revenue**")
                .facts(vec![
                    fact("Ad Revenue", format!("{} monthly", revenue.ad_revenue_monthly)),
                    fact("Sponsorships", format!("{} per post", revenue.sponsorship_per_post)),
                    fact(
                        "Affiliate Marketing",
                        format!("{} monthly", revenue.affiliate_monthly),
                    ),
                ])
                .subheading("2. **Direct Revenue**")
                .facts(vec![
                    fact("Digital Products", "Courses, ebooks, templates"),
                    fact("Services", "Consulting, coaching, custom content"),
                    fact("Memberships", "Exclusive content, community access"),
                    fact("Merchandise", "Branded products, merchandise"),
                ])
                .subheading("3. **Brand Partnerships**")
                .facts(vec![
                    fact("Sponsored Content", "$1K-50K per collaboration"),
                    fact("Brand Ambassadorships", "$5K-100K annually"),
                    fact("Product Launches", "$10K-200K per campaign"),
                ]),
        )
        .section(
            Section::new("growth_strategy", "📈", "Growth Strategy")
                .subheading("Content Optimization")
                .numbered([
                    "**SEO Optimization:** Improve discoverability",
                    "**Engagement Focus:** Increase viewer retention",
                    "**Consistency:** Regular posting schedule",
                    "**Quality:** Invest in better equipment/editing",
                ])
                .subheading("Audience Growth")
                .numbered([
                    "**Cross-platform promotion**",
                    "**Collaborations with other creators**",
                    "**Community building**",
                    "**Trend participation**",
                ])
                .subheading("Monetization Optimization")
                .numbered([
                    "**Diversify revenue streams**",
                    "**Test different pricing strategies**",
                    "**Build email list**",
                    "**Create evergreen content**",
                ]),
        )
        .section(
            Section::new("platform_strategy", "🎯", "Platform-Specific Strategies")
                .subheading(format!("{} Optimization", platform.label()))
                .facts(vec![
                    fact("Best posting times", platform.best_posting_time()),
                    fact("Optimal content length", platform.content_length()),
                    fact("Engagement tactics", platform.engagement_tactics()),
                ]),
        )
        .section(
            Section::new("revenue_projections", "📊", "Revenue Projections")
                .subheading("Monthly Revenue Potential")
                .facts(vec![
                    fact("Current", revenue.ad_revenue_monthly),
                    fact("6 months", revenue.six_months),
                    fact("12 months", revenue.twelve_months),
                ]),
        )
        .section(Section::new("action_plan", "🚀", "Action Plan").numbered([
            "**Audit current content performance**",
            "**Implement SEO best practices**",
            "**Start affiliate marketing**",
            "**Pitch to potential sponsors**",
            "**Create digital products**",
            "**Build email list**",
            "**Optimize posting schedule**",
            "**Engage with audience consistently**",
        ]))
        .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
            "**Focus on value over views**",
            "**Build authentic relationships with audience**",
            "**Diversify income streams**",
            "**Invest in quality over quantity**",
            "**Stay consistent and patient**",
        ]))
        .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
    }

    fn params(platform: &str, audience: &str) -> MonetizationParams {
        MonetizationParams {
            content_type: "video".to_string(),
            platform: platform.to_string(),
            audience_size: audience.to_string(),
        }
    }

    #[test]
    fn test_revenue_scales_with_audience() {
        let small = ContentMonetization::generate(&params("youtube", "small"), &ctx());
        let large = ContentMonetization::generate(&params("youtube", "large"), &ctx());

        let small_text = small.get("revenue_projections").unwrap().text();
        let large_text = large.get("revenue_projections").unwrap().text();
        assert!(small_text.contains("**12 months:** $5K-20K"));
        assert!(large_text.contains("**12 months:** $80K-300K"));
    }

    #[test]
    fn test_platform_specific_timing() {
        let bundle = ContentMonetization::generate(&params("TikTok", "medium"), &ctx());
        let strategy = bundle.get("platform_strategy").unwrap().text();
        assert!(strategy.contains("Tiktok Optimization"));
        assert!(strategy.contains("6-10 PM"));
        assert!(strategy.contains("Trending sounds, challenges"));
        assert_eq!(bundle.title, "Content Monetization Strategy: Video on Tiktok");
    }

    #[test]
    fn test_unknown_platform_and_audience_fall_back() {
        let bundle = ContentMonetization::generate(&params("myspace", "galactic"), &ctx());
        let strategy = bundle.get("platform_strategy").unwrap().text();
        assert!(strategy.contains("Youtube Optimization"));
        assert!(strategy.contains("7-9 PM"));
        assert!(bundle
            .get("monetization_opportunities")
            .unwrap()
            .text()
            .contains("$2K-10K monthly"));
        assert_eq!(bundle.notes.len(), 2);
    }
}
