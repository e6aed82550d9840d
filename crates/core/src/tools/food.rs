// Recipe ideas and food trend predictions

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct FoodParams {
    pub cuisine_type: String,
    #[serde(default = "default_dietary_restrictions")]
    pub dietary_restrictions: String,
    #[serde(default = "default_skill_level")]
    pub skill_level: String,
}

fn default_dietary_restrictions() -> String {
    "none".to_string()
}

fn default_skill_level() -> String {
    "intermediate".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cuisine {
    #[default]
    Italian,
    Asian,
    Mexican,
    Fusion,
}

impl Choice for Cuisine {
    const ALL: &'static [Self] = &[Self::Italian, Self::Asian, Self::Mexican, Self::Fusion];

    fn key(self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::Asian => "asian",
            Self::Mexican => "mexican",
            Self::Fusion => "fusion",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl Choice for Diet {
    const ALL: &'static [Self] = &[Self::None, Self::Vegetarian, Self::Vegan, Self::GlutenFree];

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten-free",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::GlutenFree => &["gluten free", "glutenfree", "celiac"],
            Self::None => &["no", "n/a"],
            _ => &[],
        }
    }
}

impl Diet {
    fn swaps(self) -> &'static [&'static str] {
        match self {
            Self::None => &["No restrictions: explore the full ingredient list freely"],
            Self::Vegetarian => &[
                "Swap meat for mushrooms, halloumi or paneer",
                "Use vegetable stock as the flavor base",
                "Add eggs and legumes for protein",
            ],
            Self::Vegan => &[
                "Use tempeh, seitan or jackfruit in place of meat",
                "Replace dairy with cashew cream or oat milk",
                "Boost umami with miso, nutritional yeast and soy sauce",
            ],
            Self::GlutenFree => &[
                "Use rice, corn or buckwheat noodles and pasta",
                "Thicken sauces with cornstarch instead of flour",
                "Check soy sauce and stock labels; use tamari",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Choice for SkillLevel {
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Advanced];

    fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl SkillLevel {
    fn tips(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => &[
                "Start with simple recipes",
                "Master basic techniques",
                "Use quality ingredients",
                "Don't be afraid to experiment",
            ],
            Self::Intermediate => &[
                "Try new cuisines",
                "Experiment with techniques",
                "Develop your palate",
                "Share your creations",
            ],
            Self::Advanced => &[
                "Create original recipes",
                "Master complex techniques",
                "Mentor others",
                "Push culinary boundaries",
            ],
        }
    }
}

fn recipe_idea(cuisine: Cuisine, level: SkillLevel) -> &'static str {
    use Cuisine::*;
    use SkillLevel::*;
    match (cuisine, level) {
        (Italian, Beginner) => "Modern pasta dishes with seasonal vegetables",
        (Asian, Beginner) => "Quick stir-fries with bold flavors",
        (Mexican, Beginner) => "Fresh tacos with homemade tortillas",
        (Fusion, Beginner) => "East-meets-West comfort food",
        (Italian, Intermediate) => "Homemade pasta with creative sauces",
        (Asian, Intermediate) => "Complex curries and noodle dishes",
        (Mexican, Intermediate) => "Authentic mole and tamales",
        (Fusion, Intermediate) => "Multi-cultural tasting menus",
        (Italian, Advanced) => "Artisanal bread and pizza making",
        (Asian, Advanced) => "Traditional techniques with modern twists",
        (Mexican, Advanced) => "Regional specialties and complex sauces",
        (Fusion, Advanced) => "Molecular gastronomy meets tradition",
    }
}

pub struct FoodInnovator;

impl Advisor for FoodInnovator {
    type Params = FoodParams;

    const NAME: &'static str = "food_innovator";
    const DESCRIPTION: &'static str = "Create unique recipes and predict food trends";
    const USE_WHEN: &'static str =
        "When you want to create innovative recipes or understand food trends";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                "cuisine_type",
                "Cuisine type: 'italian', 'asian', 'mexican', 'fusion'",
            ),
            ParamSpec::optional(
                "dietary_restrictions",
                "Dietary restrictions: 'none', 'vegetarian', 'vegan', 'gluten-free'",
                "none",
            ),
            ParamSpec::optional(
                "skill_level",
                "Cooking skill level: 'beginner', 'intermediate', 'advanced'",
                "intermediate",
            ),
        ];
        PARAMS
    }

    fn generate(params: &FoodParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let cuisine: Option<Cuisine> = resolver.required("cuisine_type", &params.cuisine_type);
        let diet: Diet = resolver.optional("dietary_restrictions", &params.dietary_restrictions);
        let level: SkillLevel = resolver.optional("skill_level", &params.skill_level);

        let ideas = match cuisine {
            Some(c) => vec![fact(c.label(), recipe_idea(c, level))],
            None => Cuisine::ALL
                .iter()
                .map(|&c| fact(c.label(), recipe_idea(c, level)))
                .collect(),
        };

        AdviceBundle::new(Self::NAME, "Food Innovation & Recipe Creator")
            .section(overview(
                "culinary_analysis",
                "🍽️",
                "Culinary Analysis",
                vec![
                    fact("Cuisine Type", capitalize(&params.cuisine_type)),
                    fact("Dietary Restrictions", capitalize(&params.dietary_restrictions)),
                    fact("Skill Level", capitalize(&params.skill_level)),
                ],
                ctx,
            ))
            .section(
                Section::new(
                    "trending_concepts",
                    "🚀",
                    format!("Trending Food Concepts for {}", ctx.year()),
                )
                .subheading("Hot Trends")
                .numbered([
                    "**Plant-Based Innovation:** Beyond meat alternatives, creative vegan dishes",
                    "**Fusion Cuisine:** Global flavor combinations, cultural mashups",
                    "**Functional Foods:** Health-boosting ingredients, superfoods",
                    "**Sustainable Cooking:** Zero-waste recipes, local ingredients",
                    "**Tech-Enhanced Dining:** Smart kitchen gadgets, AI recipe assistants",
                ])
                .subheading("Emerging Ingredients")
                .facts(vec![
                    fact("Alternative Proteins", "Tempeh, seitan, jackfruit"),
                    fact("Ancient Grains", "Quinoa, farro, freekeh"),
                    fact("Superfoods", "Moringa, spirulina, matcha"),
                    fact("Fermented Foods", "Kimchi, kombucha, miso"),
                ]),
            )
            .section(
                Section::new("recipe_recommendations", "🎯", "Personalized Recipe Recommendations")
                    .subheading(format!(
                        "{} Innovation Ideas",
                        capitalize(&params.cuisine_type)
                    ))
                    .label(format!("{} Level", level.label()))
                    .facts(ideas)
                    .label(format!("{} Adjustments", diet.label()))
                    .bullets(diet.swaps().iter().copied()),
            )
            .section(
                Section::new("trend_predictions", "📈", "Food Trend Predictions")
                    .subheading("Restaurant Concepts")
                    .numbered([
                        "**Ghost Kitchens:** Delivery-only restaurants",
                        "**Pop-up Experiences:** Temporary dining concepts",
                        "**Farm-to-Table 2.0:** Hyper-local ingredient sourcing",
                        "**Tech-Forward Dining:** QR menus, contactless ordering",
                    ])
                    .subheading("Consumer Preferences")
                    .bullets([
                        "**Health-conscious eating**",
                        "**Convenience without compromise**",
                        "**Authentic cultural experiences**",
                        "**Sustainable food choices**",
                    ]),
            )
            .section(
                Section::new("innovation_framework", "🍳", "Recipe Innovation Framework")
                    .subheading("Flavor Combinations")
                    .facts(vec![
                        fact("Sweet & Spicy", "Honey + chili, maple + cayenne"),
                        fact("Umami Boost", "Mushrooms + soy sauce, miso + butter"),
                        fact("Herb & Citrus", "Basil + lemon, cilantro + lime"),
                        fact("Smoky & Sweet", "Chipotle + honey, smoked paprika + maple"),
                    ])
                    .subheading("Technique Innovation")
                    .numbered([
                        "**Sous Vide:** Precise temperature cooking",
                        "**Fermentation:** Homemade pickles, kimchi, sourdough",
                        "**Smoking:** Wood-fired flavors, tea-smoking",
                        "**Molecular Gastronomy:** Spherification, foams, gels",
                    ]),
            )
            .section(
                Section::new("cooking_tips", "💡", "Cooking Tips")
                    .subheading(format!("For {} Cooks", level.label()))
                    .bullets(level.tips().iter().copied()),
            )
            .section(
                Section::new("ingredient_sourcing", "🛒", "Ingredient Sourcing").facts(vec![
                    fact("Local Farmers Markets", "Fresh, seasonal produce"),
                    fact("Ethnic Grocery Stores", "Authentic ingredients"),
                    fact("Online Specialty Shops", "Hard-to-find items"),
                    fact(
                        "Community Supported Agriculture (CSA)",
                        "Weekly fresh produce",
                    ),
                ]),
            )
            .section(Section::new("food_tech", "📱", "Food Tech Trends").facts(vec![
                fact("Recipe Apps", "Personalized meal planning"),
                fact("Smart Kitchen Gadgets", "AI-powered cooking assistants"),
                fact("Food Delivery Innovation", "Ghost kitchens, meal kits"),
                fact("Social Media Food", "Instagram-worthy dishes, TikTok recipes"),
            ]))
            .section(
                Section::new("presentation_tips", "🎨", "Presentation Tips").facts(vec![
                    fact("Color Contrast", "Bright vegetables, colorful garnishes"),
                    fact("Texture Variety", "Crispy, creamy, crunchy elements"),
                    fact("Height & Depth", "Layered dishes, elevated plating"),
                    fact("Garnish Thoughtfully", "Edible flowers, microgreens, herbs"),
                ]),
            )
            .with_notes(resolver.into_notes())
    }
}
