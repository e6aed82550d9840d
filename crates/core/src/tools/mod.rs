// The ten advice generators

pub mod crypto;
pub mod dating;
pub mod fashion;
pub mod food;
pub mod influencer;
pub mod monetization;
pub mod nft;
pub mod social;
pub mod startup;
pub mod travel;

pub use crypto::{CryptoIntelligence, CryptoParams};
pub use dating::{DatingOptimizer, DatingParams};
pub use fashion::{FashionParams, FashionPredictor};
pub use food::{FoodInnovator, FoodParams};
pub use influencer::{InfluencerMatcher, InfluencerParams};
pub use monetization::{ContentMonetization, MonetizationParams};
pub use nft::{NftCreator, NftParams};
pub use social::{SocialParams, SocialTrendPredictor};
pub use startup::{StartupBuilder, StartupParams};
pub use travel::{TravelCurator, TravelParams};

/// Names of every advisor, in registration order
pub const ADVISOR_NAMES: &[&str] = &[
    "crypto_intelligence",
    "startup_builder",
    "content_monetization",
    "fashion_predictor",
    "food_innovator",
    "nft_creator",
    "social_media_trend_predictor",
    "influencer_matcher",
    "dating_optimizer",
    "travel_curator",
];
