// NFT concept generation and digital art market commentary

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NftParams {
    pub art_style: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_rarity_level")]
    pub rarity_level: String,
}

fn default_theme() -> String {
    "cyberpunk".to_string()
}

fn default_rarity_level() -> String {
    "rare".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArtStyle {
    #[default]
    Digital,
    Pixel,
    ThreeD,
    Abstract,
    Photography,
}

impl Choice for ArtStyle {
    const ALL: &'static [Self] = &[
        Self::Digital,
        Self::Pixel,
        Self::ThreeD,
        Self::Abstract,
        Self::Photography,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Pixel => "pixel",
            Self::ThreeD => "3d",
            Self::Abstract => "abstract",
            Self::Photography => "photography",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ThreeD => &["3-d", "three-d"],
            Self::Pixel => &["pixel art"],
            Self::Photography => &["photo"],
            _ => &[],
        }
    }

    fn label(self) -> String {
        match self {
            Self::ThreeD => "3D".to_string(),
            other => capitalize(other.key()),
        }
    }
}

/// How to produce art in one style
struct StyleGuide {
    heading: &'static str,
    tools: &'static str,
    techniques: &'static str,
    formats: &'static str,
    extra: (&'static str, &'static str),
}

impl ArtStyle {
    fn guide(self) -> StyleGuide {
        match self {
            Self::Digital => StyleGuide {
                heading: "Digital Art",
                tools: "Photoshop, Procreate, Illustrator",
                techniques: "Digital painting, vector graphics",
                formats: "PNG, SVG, MP4 for animations",
                extra: ("Resolution", "Minimum 1000x1000 pixels"),
            },
            Self::Pixel => StyleGuide {
                heading: "Pixel Art",
                tools: "Aseprite, Piskel, Photoshop",
                techniques: "Pixel-perfect design, limited color palette",
                formats: "PNG, GIF for animations",
                extra: ("Resolution", "16x16 to 512x512 pixels"),
            },
            Self::ThreeD => StyleGuide {
                heading: "3D Art",
                tools: "Blender, Maya, Cinema 4D",
                techniques: "3D modeling, texturing, rendering",
                formats: "GLB, GLTF, MP4 for animations",
                extra: ("Complexity", "Low-poly to high-detail models"),
            },
            Self::Abstract => StyleGuide {
                heading: "Abstract Art",
                tools: "Any digital art software",
                techniques: "Geometric shapes, color theory, composition",
                formats: "PNG, SVG, MP4",
                extra: ("Style", "Non-representational, emotional expression"),
            },
            Self::Photography => StyleGuide {
                heading: "Photography",
                tools: "Camera, Lightroom, Photoshop",
                techniques: "Digital photography, post-processing",
                formats: "RAW, JPEG, PNG",
                extra: ("Quality", "High-resolution, professional grade"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Cyberpunk,
    Nature,
    Space,
    Anime,
    Minimalist,
}

impl Choice for Theme {
    const ALL: &'static [Self] = &[
        Self::Cyberpunk,
        Self::Nature,
        Self::Space,
        Self::Anime,
        Self::Minimalist,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Cyberpunk => "cyberpunk",
            Self::Nature => "nature",
            Self::Space => "space",
            Self::Anime => "anime",
            Self::Minimalist => "minimalist",
        }
    }
}

impl Theme {
    fn description(self) -> &'static str {
        match self {
            Self::Cyberpunk => "Futuristic, neon, dystopian aesthetics",
            Self::Nature => "Organic, environmental, sustainable themes",
            Self::Space => "Cosmic, astronomical, sci-fi elements",
            Self::Anime => "Japanese animation style, manga-inspired",
            Self::Minimalist => "Clean, simple, geometric designs",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rarity {
    Common,
    #[default]
    Rare,
    Epic,
    Legendary,
}

impl Choice for Rarity {
    const ALL: &'static [Self] = &[Self::Common, Self::Rare, Self::Epic, Self::Legendary];

    fn key(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl Rarity {
    /// Percentage of a collection at this tier
    fn share(self) -> u8 {
        match self {
            Self::Common => 70,
            Self::Rare => 20,
            Self::Epic => 8,
            Self::Legendary => 2,
        }
    }

    fn price_range(self) -> &'static str {
        match self {
            Self::Common => "$50-500",
            Self::Rare => "$500-5,000",
            Self::Epic => "$5,000-50,000",
            Self::Legendary => "$50,000-500,000+",
        }
    }

    fn characteristics(self) -> &'static str {
        match self {
            Self::Common => "Basic traits, common colors",
            Self::Rare => "Unique combinations, special traits",
            Self::Epic => "Very rare traits, special editions",
            Self::Legendary => "One-of-a-kind, ultra-rare traits",
        }
    }

    fn demand(self) -> &'static str {
        match self {
            Self::Common => "High volume, low individual value",
            Self::Rare => "Moderate volume, good value",
            Self::Epic => "Low volume, high value",
            Self::Legendary => "Very low volume, premium value",
        }
    }
}

fn style_guide_section(section: Section, style: ArtStyle) -> Section {
    let guide = style.guide();
    section.label(guide.heading).facts(vec![
        fact("Tools", guide.tools),
        fact("Techniques", guide.techniques),
        fact("File Formats", guide.formats),
        fact(guide.extra.0, guide.extra.1),
    ])
}

pub struct NftCreator;

impl Advisor for NftCreator {
    type Params = NftParams;

    const NAME: &'static str = "nft_creator";
    const DESCRIPTION: &'static str = "Generate NFT ideas and predict digital art trends";
    const USE_WHEN: &'static str = "When you want to create NFTs or understand digital art trends";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "art_style",
                "Art style: 'digital', 'pixel', '3d', 'abstract', 'photography'",
            ),
            ParamSpec::optional(
                "theme",
                "Theme: 'cyberpunk', 'nature', 'space', 'anime', 'minimalist'",
                "cyberpunk",
            ),
            ParamSpec::optional(
                "rarity_level",
                "Rarity level: 'common', 'rare', 'epic', 'legendary'",
                "rare",
            ),
        ];
        PARAMS
    }

    fn generate(params: &NftParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let style: Option<ArtStyle> = resolver.required("art_style", &params.art_style);
        let theme: Theme = resolver.optional("theme", &params.theme);
        let rarity: Rarity = resolver.optional("rarity_level", &params.rarity_level);

        let mut strategy = Section::new("creation_strategy", "🎯", "NFT Creation Strategy")
            .subheading(format!("{} Art Style Guide", capitalize(&params.art_style)));
        match style {
            Some(style) => strategy = style_guide_section(strategy, style),
            None => {
                for &style in ArtStyle::ALL {
                    strategy = style_guide_section(strategy, style);
                }
            }
        }
        let strategy = strategy
            .subheading(format!("{} Theme Direction", theme.label()))
            .bullets([theme.description()]);

        let mut market = Section::new("market_analysis", "📈", "NFT Market Analysis")
            .subheading("Current Market Trends")
            .facts(vec![
                fact("Total Market Cap", "$10+ billion"),
                fact("Daily Trading Volume", "$100+ million"),
                fact("Active Collections", "10,000+ projects"),
                fact("Average Sale Price", "$200-2,000"),
            ])
            .subheading(format!("Your Tier: {}", rarity.label()))
            .facts(vec![
                fact("Share of Collection", format!("{}%", rarity.share())),
                fact("Price Range", rarity.price_range()),
                fact("Characteristics", rarity.characteristics()),
                fact("Demand", rarity.demand()),
            ])
            .subheading("Rarity Distribution");
        for &tier in Rarity::ALL {
            market = market.label(format!("{} ({}% of collection)", tier.label(), tier.share()))
                .facts(vec![
                    fact("Price Range", tier.price_range()),
                    fact("Characteristics", tier.characteristics()),
                    fact("Demand", tier.demand()),
                ]);
        }

        AdviceBundle::new(Self::NAME, "NFT Creator & Digital Art Trend Predictor")
            .section(overview(
                "nft_analysis",
                "🎨",
                "NFT Analysis",
                vec![
                    fact("Art Style", capitalize(&params.art_style)),
                    fact("Theme", capitalize(&params.theme)),
                    fact("Rarity Level", capitalize(&params.rarity_level)),
                ],
                ctx,
            ))
            .section(
                Section::new(
                    "art_trends",
                    "🚀",
                    format!("Digital Art Trends for {}", ctx.year()),
                )
                .subheading("Hot NFT Styles")
                .numbered([
                    "**AI-Generated Art:** Machine learning created pieces",
                    "**Interactive NFTs:** Art that responds to user interaction",
                    "**Generative Art:** Algorithmically created collections",
                    "**3D Digital Sculptures:** Three-dimensional digital art",
                    "**Mixed Reality Art:** AR/VR integrated pieces",
                ])
                .subheading("Trending Themes")
                .facts(
                    Theme::ALL
                        .iter()
                        .map(|t| fact(t.label(), t.description()))
                        .collect(),
                ),
            )
            .section(strategy)
            .section(market)
            .section(
                Section::new("monetization", "💰", "Monetization Strategies")
                    .subheading("NFT Sales Channels")
                    .numbered([
                        "**OpenSea:** Largest NFT marketplace",
                        "**Rarible:** Community-driven platform",
                        "**Foundation:** Curated, high-end marketplace",
                        "**Nifty Gateway:** Premium NFT platform",
                        "**SuperRare:** Single-edition digital art",
                    ])
                    .subheading("Pricing Strategy")
                    .bullets([
                        "**Research similar NFTs** in your style/theme",
                        "**Consider rarity and uniqueness**",
                        "**Factor in gas fees and platform costs**",
                        "**Start with reasonable prices** and adjust based on demand",
                        "**Offer multiple price points** for different collectors",
                    ])
                    .subheading("Revenue Streams")
                    .numbered([
                        "**Primary Sales:** Initial NFT minting and sales",
                        "**Secondary Sales:** Royalties from resales (2.5-10%)",
                        "**Licensing:** Commercial use rights",
                        "**Merchandise:** Physical products based on NFTs",
                        "**Exclusive Access:** VIP benefits for NFT holders",
                    ]),
            )
            .section(
                Section::new("launch_strategy", "🚀", "Launch Strategy")
                    .subheading("Pre-Launch (1-2 months)")
                    .numbered([
                        "**Build community** on Discord, Twitter",
                        "**Create teaser content** and previews",
                        "**Establish brand identity** and story",
                        "**Set up social media** presence",
                        "**Plan marketing campaign**",
                    ])
                    .subheading("Launch Day")
                    .numbered([
                        "**Mint collection** on chosen platform",
                        "**Announce on all channels** simultaneously",
                        "**Engage with community** actively",
                        "**Monitor sales** and adjust strategy",
                        "**Celebrate milestones** with community",
                    ])
                    .subheading("Post-Launch")
                    .numbered([
                        "**Maintain community engagement**",
                        "**Release additional content** and updates",
                        "**Plan future collections** or expansions",
                        "**Build partnerships** with other creators",
                        "**Explore new platforms** and opportunities",
                    ]),
            )
            .section(Section::new("pro_tips", "💡", "Pro Tips").bullets([
                "**Quality over quantity** - focus on creating amazing art",
                "**Build community first** - engaged community drives sales",
                "**Tell a story** - give your NFTs meaning and context",
                "**Be consistent** - regular releases maintain interest",
                "**Stay authentic** - create art you're passionate about",
                "**Network with other artists** - collaborations expand reach",
                "**Learn from data** - analyze what sells and why",
                "**Think long-term** - build sustainable business model",
                "**Protect your work** - use proper licensing and contracts",
                "**Stay updated** - NFT space evolves rapidly",
            ]))
            .with_notes(resolver.into_notes())
    }
}
