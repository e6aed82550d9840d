mod advice;
mod registry;
mod validate;

pub use advice::AdviceTool;
pub use registry::{json_schema_object, json_schema_string, rich_description, Tool, ToolRegistry};
pub use validate::ValidateTool;

use lifestyle_core::tools::{
    ContentMonetization, CryptoIntelligence, DatingOptimizer, FashionPredictor, FoodInnovator,
    InfluencerMatcher, NftCreator, SocialTrendPredictor, StartupBuilder, TravelCurator,
};
use std::sync::Arc;

/// Registry with the `validate` tool and all ten advisors
pub fn default_registry(owner_number: impl Into<String>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ValidateTool::new(owner_number)));

    registry.register(Arc::new(AdviceTool::<CryptoIntelligence>::new()));
    registry.register(Arc::new(AdviceTool::<StartupBuilder>::new()));
    registry.register(Arc::new(AdviceTool::<ContentMonetization>::new()));
    registry.register(Arc::new(AdviceTool::<FashionPredictor>::new()));
    registry.register(Arc::new(AdviceTool::<FoodInnovator>::new()));
    registry.register(Arc::new(AdviceTool::<NftCreator>::new()));
    registry.register(Arc::new(AdviceTool::<SocialTrendPredictor>::new()));
    registry.register(Arc::new(AdviceTool::<InfluencerMatcher>::new()));
    registry.register(Arc::new(AdviceTool::<DatingOptimizer>::new()));
    registry.register(Arc::new(AdviceTool::<TravelCurator>::new()));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestyle_core::tools::ADVISOR_NAMES;

    #[test]
    fn test_default_registry_has_every_tool() {
        let registry = default_registry("0");
        assert_eq!(registry.len(), 11);
        assert!(registry.contains("validate"));
        for name in ADVISOR_NAMES {
            assert!(registry.contains(name), "missing {}", name);
        }
    }
}
