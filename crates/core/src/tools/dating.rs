// Dating profile optimization and compatibility guidance

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatingParams {
    pub dating_platform: String,
    #[serde(default = "default_age_range")]
    pub age_range: String,
    #[serde(default = "default_relationship_goal")]
    pub relationship_goal: String,
}

fn default_age_range() -> String {
    "26-35".to_string()
}

fn default_relationship_goal() -> String {
    "serious".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatingPlatform {
    #[default]
    Tinder,
    Bumble,
    Hinge,
    OkCupid,
}

impl Choice for DatingPlatform {
    const ALL: &'static [Self] = &[Self::Tinder, Self::Bumble, Self::Hinge, Self::OkCupid];

    fn key(self) -> &'static str {
        match self {
            Self::Tinder => "tinder",
            Self::Bumble => "bumble",
            Self::Hinge => "hinge",
            Self::OkCupid => "okcupid",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::OkCupid => &["ok cupid", "okc"],
            _ => &[],
        }
    }

    fn label(self) -> String {
        match self {
            Self::OkCupid => "OkCupid".to_string(),
            other => capitalize(other.key()),
        }
    }
}

struct PlatformStrategy {
    best_for: &'static str,
    profile_focus: &'static str,
    swiping: &'static str,
    success_rate: &'static str,
    bio_length: &'static str,
}

impl DatingPlatform {
    fn strategy(self) -> PlatformStrategy {
        match self {
            Self::Tinder => PlatformStrategy {
                best_for: "Casual dating, hookups",
                profile_focus: "Attractive photos, short bio",
                swiping: "Be selective, quality over quantity",
                success_rate: "5-10% match to date conversion",
                bio_length: "100-200 characters (concise)",
            },
            Self::Bumble => PlatformStrategy {
                best_for: "Serious relationships, professional networking",
                profile_focus: "Detailed bio, conversation starters",
                swiping: "Women make first move, be patient",
                success_rate: "8-15% match to date conversion",
                bio_length: "300-500 characters (detailed)",
            },
            Self::Hinge => PlatformStrategy {
                best_for: "Serious relationships, meaningful connections",
                profile_focus: "Detailed prompts, authentic answers",
                swiping: "Thoughtful responses, genuine interest",
                success_rate: "12-20% match to date conversion",
                bio_length: "Answer prompts thoughtfully",
            },
            Self::OkCupid => PlatformStrategy {
                best_for: "Compatibility matching, detailed profiles",
                profile_focus: "Comprehensive questions, detailed bio",
                swiping: "Answer questions honestly, focus on compatibility",
                success_rate: "10-18% match to date conversion",
                bio_length: "500-1000 characters (comprehensive)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationshipGoal {
    Casual,
    #[default]
    Serious,
    Friendship,
    Marriage,
}

impl Choice for RelationshipGoal {
    const ALL: &'static [Self] = &[
        Self::Casual,
        Self::Serious,
        Self::Friendship,
        Self::Marriage,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Serious => "serious",
            Self::Friendship => "friendship",
            Self::Marriage => "marriage",
        }
    }
}

impl RelationshipGoal {
    fn date_ideas(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Casual => (
                "Casual Dating",
                &[
                    "Coffee or drinks",
                    "Casual dinner",
                    "Activity-based dates (bowling, mini-golf)",
                    "Outdoor activities (hiking, park walks)",
                ],
            ),
            Self::Serious | Self::Marriage => (
                "Serious Relationships",
                &[
                    "Dinner at nice restaurant",
                    "Cultural activities (museums, shows)",
                    "Cooking class or wine tasting",
                    "Weekend getaway or day trip",
                ],
            ),
            Self::Friendship => (
                "Friendship",
                &[
                    "Group activities or events",
                    "Casual meetups",
                    "Shared hobby activities",
                    "Community events",
                ],
            ),
        }
    }
}

fn platform_block(section: Section, platform: DatingPlatform) -> Section {
    let s = platform.strategy();
    section.label(platform.label()).facts(vec![
        fact("Best for", s.best_for),
        fact("Profile focus", s.profile_focus),
        fact("Swiping strategy", s.swiping),
        fact("Success rate", s.success_rate),
    ])
}

pub struct DatingOptimizer;

impl Advisor for DatingOptimizer {
    type Params = DatingParams;

    const NAME: &'static str = "dating_optimizer";
    const DESCRIPTION: &'static str = "Optimize dating profiles and predict compatibility";
    const USE_WHEN: &'static str =
        "When you want to improve your dating success or understand compatibility";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "dating_platform",
                "Dating platform: 'tinder', 'bumble', 'hinge', 'okcupid'",
            ),
            ParamSpec::optional(
                "age_range",
                "Age range: '18-25', '26-35', '36-45', '45+'",
                "26-35",
            ),
            ParamSpec::optional(
                "relationship_goal",
                "Relationship goal: 'casual', 'serious', 'friendship', 'marriage'",
                "serious",
            ),
        ];
        PARAMS
    }

    fn generate(params: &DatingParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let platform: Option<DatingPlatform> =
            resolver.required("dating_platform", &params.dating_platform);
        let goal: RelationshipGoal =
            resolver.optional("relationship_goal", &params.relationship_goal);

        let mut trends = Section::new(
            "dating_trends",
            "🚀",
            format!("Dating Trends for {}", ctx.year()),
        )
        .subheading("Platform-Specific Strategies");
        let bio_lengths = match platform {
            Some(p) => {
                trends = platform_block(trends, p);
                vec![fact(p.label(), p.strategy().bio_length)]
            }
            None => {
                for &p in DatingPlatform::ALL {
                    trends = platform_block(trends, p);
                }
                DatingPlatform::ALL
                    .iter()
                    .map(|p| fact(p.label(), p.strategy().bio_length))
                    .collect()
            }
        };

        let (goal_heading, ideas) = goal.date_ideas();

        AdviceBundle::new(
            Self::NAME,
            "Dating Profile Optimizer & Compatibility Predictor",
        )
        .section(overview(
            "dating_analysis",
            "💕",
            "Dating Analysis",
            vec![
                fact("Platform", capitalize(&params.dating_platform)),
                fact("Age Range", params.age_range.clone()),
                fact("Relationship Goal", capitalize(&params.relationship_goal)),
            ],
            ctx,
        ))
        .section(trends)
        .section(
            Section::new("profile_optimization", "📸", "Profile Optimization Guide")
                .subheading("Photo Strategy")
                .label("Primary Photo (First impression)")
                .bullets([
                    "**High-quality headshot** with genuine smile",
                    "**Good lighting** and clear background",
                    "**Eye contact** with camera",
                    "**Recent photo** (within 6 months)",
                ])
                .label("Additional Photos")
                .bullets([
                    "**Activity shots** showing hobbies and interests",
                    "**Group photos** (but not too many)",
                    "**Travel photos** showing adventure side",
                    "**Professional photos** showing career success",
                ])
                .label("Photo Don'ts")
                .bullets([
                    "❌ Selfies in bathroom/car",
                    "❌ Group photos where you're hard to identify",
                    "❌ Blurry or low-quality images",
                    "❌ Photos with ex-partners",
                    "❌ Too many filters or editing",
                ])
                .subheading("Bio Writing Tips")
                .label("Length by Platform")
                .facts(bio_lengths)
                .label("Bio Structure")
                .numbered([
                    "**Hook:** Interesting opening line",
                    "**Interests:** Hobbies, passions, activities",
                    "**Personality:** What makes you unique",
                    "**Call to action:** Conversation starter",
                ])
                .label("Bio Examples")
                .bullets([
                    "\"Adventure seeker who believes the best stories happen outside your comfort zone 🏔️\"",
                    "\"Coffee enthusiast, book lover, and amateur chef. Looking for someone to share life's little moments with ☕\"",
                    "\"Passionate about [interest] and always up for trying something new. Let's create memories together!\"",
                ]),
        )
        .section(
            Section::new("compatibility", "🎯", "Compatibility Prediction")
                .subheading("Success Factors")
                .numbered([
                    "**Profile Quality:** 30% importance",
                    "**Messaging Strategy:** 25% importance",
                    "**Timing:** 20% importance",
                    "**Location:** 15% importance",
                    "**Luck:** 10% importance",
                ])
                .subheading("Compatibility Indicators")
                .label("High Compatibility")
                .bullets([
                    "✅ Shared interests and values",
                    "✅ Similar life goals and timeline",
                    "✅ Good communication skills",
                    "✅ Mutual attraction and chemistry",
                    "✅ Compatible lifestyles",
                ])
                .label("Red Flags")
                .bullets([
                    "❌ Inconsistent or dishonest profile",
                    "❌ Poor communication or ghosting",
                    "❌ Different relationship goals",
                    "❌ Incompatible lifestyles or values",
                    "❌ Lack of effort or engagement",
                ]),
        )
        .section(
            Section::new("messaging_strategy", "💬", "Messaging Strategy")
                .subheading("Opening Lines")
                .label("Effective Openers")
                .bullets([
                    "\"I noticed you're into [shared interest]. What's your favorite [related topic]?\"",
                    "\"Your profile made me smile! I'd love to hear more about [specific detail]\"",
                    "\"Hey! I'm also passionate about [interest]. Have you tried [related activity]?\"",
                ])
                .label("Conversation Starters")
                .bullets([
                    "Ask about their interests and experiences",
                    "Share relevant stories or anecdotes",
                    "Ask thoughtful follow-up questions",
                    "Show genuine curiosity about their life",
                ])
                .subheading("Messaging Tips")
                .bullets([
                    "**Be authentic** and genuine",
                    "**Ask questions** to show interest",
                    "**Share about yourself** but don't dominate",
                    "**Keep it light** and positive initially",
                    "**Move to phone/video** after good conversation",
                    "**Plan first date** within 1-2 weeks of matching",
                ]),
        )
        .section(
            Section::new("first_date", "📅", "First Date Planning")
                .subheading("Date Ideas by Goal")
                .label(goal_heading)
                .bullets(ideas.iter().copied())
                .subheading("Date Success Tips")
                .bullets([
                    "**Choose comfortable location** for both parties",
                    "**Plan backup options** in case of weather/issues",
                    "**Keep first date short** (1-2 hours)",
                    "**Dress appropriately** for the activity",
                    "**Be on time** and respectful",
                    "**Have conversation topics** ready",
                    "**Listen actively** and show interest",
                    "**End positively** regardless of outcome",
                ]),
        )
        .section(Section::new("action_plan", "🚀", "Action Plan").numbered([
            "**Optimize your profile** with high-quality photos and compelling bio",
            "**Set realistic expectations** for your dating goals",
            "**Be consistent** with swiping and messaging",
            "**Stay positive** and don't get discouraged by rejection",
            "**Learn from each interaction** and improve your approach",
            "**Be patient** - finding the right person takes time",
            "**Stay safe** - meet in public places and trust your instincts",
            "**Have fun** - dating should be enjoyable, not stressful",
        ]))
        .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
            "**Be yourself** - authenticity attracts the right people",
            "**Quality over quantity** - focus on meaningful connections",
            "**Don't rush** - take time to get to know people",
            "**Stay positive** - dating can be challenging but rewarding",
            "**Learn from rejection** - it's part of the process",
            "**Trust your instincts** - if something feels off, move on",
            "**Have standards** - don't settle for less than you deserve",
            "**Keep growing** - work on yourself while looking for others",
        ]))
        .with_notes(resolver.into_notes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> AdviceContext {
        AdviceContext::on(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap())
    }

    fn params(platform: &str, goal: &str) -> DatingParams {
        DatingParams {
            dating_platform: platform.to_string(),
            age_range: default_age_range(),
            relationship_goal: goal.to_string(),
        }
    }

    #[test]
    fn test_hinge_strategy_and_bio_length() {
        let bundle = DatingOptimizer::generate(&params("Hinge", "serious"), &ctx());
        let trends = bundle.get("dating_trends").unwrap().text();
        assert!(trends.contains("12-20% match to date conversion"));
        assert!(!trends.contains("Women make first move"));
        assert!(bundle
            .get("profile_optimization")
            .unwrap()
            .text()
            .contains("**Hinge:** Answer prompts thoughtfully"));
    }

    #[test]
    fn test_marriage_goal_uses_serious_date_ideas() {
        let bundle = DatingOptimizer::generate(&params("bumble", "marriage"), &ctx());
        let first_date = bundle.get("first_date").unwrap().text();
        assert!(first_date.contains("Serious Relationships"));
        assert!(first_date.contains("Weekend getaway"));
    }

    #[test]
    fn test_unknown_platform_covers_all() {
        let bundle = DatingOptimizer::generate(&params("grindr", "casual"), &ctx());
        let trends = bundle.get("dating_trends").unwrap().text();
        assert!(trends.contains("**OkCupid:**"));
        assert!(trends.contains("**Tinder:**"));
        assert!(bundle
            .get("first_date")
            .unwrap()
            .text()
            .contains("Activity-based dates"));
        assert_eq!(bundle.notes.len(), 1);
    }
}
