// Social media trend predictions keyed by platform and niche

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SocialParams {
    pub platform: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default = "default_niche")]
    pub niche: String,
}

fn default_content_type() -> String {
    "video".to_string()
}

fn default_niche() -> String {
    "lifestyle".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SocialPlatform {
    #[default]
    TikTok,
    Instagram,
    YouTube,
    Twitter,
}

impl Choice for SocialPlatform {
    const ALL: &'static [Self] = &[Self::TikTok, Self::Instagram, Self::YouTube, Self::Twitter];

    fn key(self) -> &'static str {
        match self {
            Self::TikTok => "tiktok",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::Twitter => "twitter",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Twitter => &["x", "twitter/x"],
            Self::Instagram => &["ig", "insta"],
            _ => &[],
        }
    }
}

/// Platform playbook
struct PlatformProfile {
    heading: &'static str,
    trends: [(&'static str, &'static str); 4],
    best_time: &'static str,
    frequency: &'static str,
    engagement_window: &'static str,
    viral_threshold: &'static str,
}

impl SocialPlatform {
    fn profile(self) -> PlatformProfile {
        match self {
            Self::TikTok => PlatformProfile {
                heading: "TikTok",
                trends: [
                    ("Trending Sounds", "Viral audio clips, remixes"),
                    ("Visual Effects", "AR filters, transitions"),
                    ("Content Length", "15-60 seconds optimal"),
                    ("Engagement", "Comments, shares, duets"),
                ],
                best_time: "7-9 PM",
                frequency: "2-3 times daily",
                engagement_window: "First 2 hours critical",
                viral_threshold: "100K+ views, 10K+ likes",
            },
            Self::Instagram => PlatformProfile {
                heading: "Instagram",
                trends: [
                    ("Reels", "Short-form video content"),
                    ("Stories", "Daily updates, polls, questions"),
                    ("IGTV", "Longer-form content"),
                    ("Carousel Posts", "Multiple images/videos"),
                ],
                best_time: "12-3 PM",
                frequency: "1-2 times daily",
                engagement_window: "First 6 hours important",
                viral_threshold: "50K+ views, 5K+ likes",
            },
            Self::YouTube => PlatformProfile {
                heading: "YouTube",
                trends: [
                    ("Shorts", "Vertical video format"),
                    ("Long-form", "10-20 minute deep dives"),
                    ("Live Streaming", "Real-time interaction"),
                    ("Community Posts", "Engagement beyond videos"),
                ],
                best_time: "2-4 PM",
                frequency: "2-3 times weekly",
                engagement_window: "First 24 hours key",
                viral_threshold: "100K+ views, 10K+ likes",
            },
            Self::Twitter => PlatformProfile {
                heading: "Twitter/X",
                trends: [
                    ("Threads", "Long-form content in tweets"),
                    ("Spaces", "Audio conversations"),
                    ("Trending Topics", "Real-time discussions"),
                    ("Visual Content", "Images, GIFs, videos"),
                ],
                best_time: "9-11 AM",
                frequency: "3-5 times daily",
                engagement_window: "First 30 minutes crucial",
                viral_threshold: "10K+ impressions, 1K+ likes",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SocialNiche {
    #[default]
    Lifestyle,
    Tech,
    Fashion,
    Food,
    Comedy,
}

impl Choice for SocialNiche {
    const ALL: &'static [Self] = &[
        Self::Lifestyle,
        Self::Tech,
        Self::Fashion,
        Self::Food,
        Self::Comedy,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Lifestyle => "lifestyle",
            Self::Tech => "tech",
            Self::Fashion => "fashion",
            Self::Food => "food",
            Self::Comedy => "comedy",
        }
    }
}

impl SocialNiche {
    fn topics(self) -> &'static str {
        match self {
            Self::Lifestyle => "Daily routines, wellness tips, home organization",
            Self::Tech => "App reviews, gadget unboxings, tech tips",
            Self::Fashion => "Outfit ideas, style tips, shopping hauls",
            Self::Food => "Recipe tutorials, food reviews, cooking tips",
            Self::Comedy => "Skits, parodies, relatable humor",
        }
    }
}

fn platform_block(section: Section, platform: SocialPlatform) -> Section {
    let profile = platform.profile();
    section.label(profile.heading).facts(
        profile
            .trends
            .iter()
            .map(|(label, value)| fact(*label, *value))
            .collect(),
    )
}

fn timing_block(section: Section, platform: SocialPlatform) -> Section {
    let profile = platform.profile();
    section.facts(vec![
        fact("Best Posting Times", profile.best_time),
        fact("Optimal Frequency", profile.frequency),
        fact("Engagement Windows", profile.engagement_window),
    ])
}

pub struct SocialTrendPredictor;

impl Advisor for SocialTrendPredictor {
    type Params = SocialParams;

    const NAME: &'static str = "social_media_trend_predictor";
    const DESCRIPTION: &'static str = "Predict viral social media trends and content success";
    const USE_WHEN: &'static str =
        "When you want to create viral content or predict social media trends";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "platform",
                "Social media platform: 'tiktok', 'instagram', 'youtube', 'twitter'",
            ),
            ParamSpec::optional(
                "content_type",
                "Type of content: 'video', 'image', 'story', 'reel'",
                "video",
            ),
            ParamSpec::optional(
                "niche",
                "Content niche: 'lifestyle', 'tech', 'fashion', 'food', 'comedy'",
                "lifestyle",
            ),
        ];
        PARAMS
    }

    fn generate(params: &SocialParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let platform: Option<SocialPlatform> = resolver.required("platform", &params.platform);
        let niche: SocialNiche = resolver.optional("niche", &params.niche);
        let platform_name = capitalize(&params.platform);

        let mut trending = Section::new(
            "trending_content",
            "🚀",
            format!("Trending Content for {}", platform_name),
        )
        .subheading("Hot Trends Right Now")
        .numbered([
            "**Authentic Storytelling:** Behind-the-scenes, real moments",
            "**Educational Content:** How-to videos, tips and tricks",
            "**Challenges & Trends:** Viral challenges, dance trends",
            "**User-Generated Content:** Community participation",
            "**Live Content:** Real-time engagement, Q&A sessions",
        ])
        .subheading("Platform-Specific Trends");

        let mut viral = Section::new("viral_predictions", "📈", "Viral Content Predictions")
            .subheading("Content That Will Go Viral")
            .numbered([
                "**Emotional Connection:** Content that makes people feel something",
                "**Relatability:** Everyday situations, common problems",
                "**Educational Value:** Learn something new",
                "**Entertainment:** Humor, creativity, talent",
                "**Inspiration:** Motivational, aspirational content",
            ])
            .subheading("Timing Strategy");

        let thresholds: Vec<_>;
        match platform {
            Some(p) => {
                trending = platform_block(trending, p);
                viral = timing_block(viral, p);
                thresholds = vec![fact(p.profile().heading, p.profile().viral_threshold)];
            }
            None => {
                for &p in SocialPlatform::ALL {
                    trending = platform_block(trending, p);
                    viral = timing_block(viral.label(p.profile().heading), p);
                }
                thresholds = SocialPlatform::ALL
                    .iter()
                    .map(|p| fact(p.profile().heading, p.profile().viral_threshold))
                    .collect();
            }
        }

        AdviceBundle::new(
            Self::NAME,
            format!("Social Media Trend Predictor: {}", platform_name),
        )
        .section(overview(
            "platform_analysis",
            "📱",
            "Platform Analysis",
            vec![
                fact("Platform", platform_name.clone()),
                fact("Content Type", capitalize(&params.content_type)),
                fact("Niche", capitalize(&params.niche)),
            ],
            ctx,
        ))
        .section(trending)
        .section(viral)
        .section(
            Section::new(
                "content_strategy",
                "🎯",
                format!("Content Strategy for {}", capitalize(&params.niche)),
            )
            .subheading("Trending Topics")
            .facts(vec![fact(niche.label(), niche.topics())])
            .subheading("Content Ideas")
            .numbered([
                "**\"Day in the Life\"** content",
                "**\"Before and After\"** transformations",
                "**\"How I...\"** tutorials",
                "**\"Reacting to...\"** content",
                "**\"Testing...\"** experiments",
            ]),
        )
        .section(
            Section::new("success_metrics", "📊", "Success Metrics")
                .subheading("Key Performance Indicators")
                .facts(vec![
                    fact("Views/Impressions", "Reach and visibility"),
                    fact("Engagement Rate", "Likes, comments, shares"),
                    fact("Follower Growth", "Audience expansion"),
                    fact("Click-through Rate", "Link clicks, profile visits"),
                    fact("Retention Rate", "How long people watch"),
                ])
                .subheading("Viral Thresholds")
                .facts(thresholds),
        )
        .section(Section::new("action_plan", "🚀", "Action Plan").numbered([
            "**Research trending hashtags** in your niche",
            "**Study successful creators** in your space",
            "**Create content calendar** with trending topics",
            "**Engage with community** consistently",
            "**Analyze performance** and iterate",
            "**Collaborate with other creators**",
            "**Stay authentic** to your brand",
            "**Experiment with different formats**",
        ]))
        .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
            "**Consistency is key** - post regularly",
            "**Engage with your audience** - reply to comments",
            "**Use trending sounds/music** when relevant",
            "**Optimize for each platform** - don't cross-post blindly",
            "**Track your analytics** and learn from data",
            "**Stay true to your voice** - authenticity wins",
            "**Network with other creators** - collaborations help",
            "**Don't chase every trend** - stay relevant to your niche",
        ]))
        .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 9, 9).unwrap())
    }

    fn params(platform: &str, niche: &str) -> SocialParams {
        SocialParams {
            platform: platform.to_string(),
            content_type: default_content_type(),
            niche: niche.to_string(),
        }
    }

    #[test]
    fn test_youtube_timing() {
        let bundle = SocialTrendPredictor::generate(&params("youtube", "tech"), &ctx());
        let viral = bundle.get("viral_predictions").unwrap().text();
        assert!(viral.contains("**Best Posting Times:** 2-4 PM"));
        assert!(viral.contains("2-3 times weekly"));
        assert!(bundle
            .get("content_strategy")
            .unwrap()
            .text()
            .contains("gadget unboxings"));
    }

    #[test]
    fn test_x_alias_maps_to_twitter() {
        let bundle = SocialTrendPredictor::generate(&params("X", "comedy"), &ctx());
        let trending = bundle.get("trending_content").unwrap().text();
        assert!(trending.contains("Twitter/X"));
        assert!(!trending.contains("Trending Sounds"));
        assert!(bundle.notes.is_empty());
    }

    #[test]
    fn test_unknown_platform_covers_all_platforms() {
        let bundle = SocialTrendPredictor::generate(&params("friendster", "lifestyle"), &ctx());
        let viral = bundle.get("viral_predictions").unwrap().text();
        for time in ["7-9 PM", "12-3 PM", "2-4 PM", "9-11 AM"] {
            assert!(viral.contains(time));
        }
        let metrics = bundle.get("success_metrics").unwrap().text();
        assert!(metrics.contains("10K+ impressions"));
        assert_eq!(bundle.notes.len(), 1);
    }
}
