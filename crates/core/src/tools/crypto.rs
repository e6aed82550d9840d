// Crypto market commentary keyed by coin and analysis type

use crate::advisor::{overview, Advisor, ParamSpec};
use crate::bundle::{fact, AdviceBundle, Section};
use crate::choice::{capitalize, mentions_word, Choice, Resolver};
use crate::context::AdviceContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CryptoParams {
    pub crypto_name: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

fn default_analysis_type() -> String {
    "trend".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisType {
    #[default]
    Trend,
    Investment,
    Sentiment,
}

impl Choice for AnalysisType {
    const ALL: &'static [Self] = &[Self::Trend, Self::Investment, Self::Sentiment];

    fn key(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Investment => "investment",
            Self::Sentiment => "sentiment",
        }
    }
}

impl AnalysisType {
    fn focus(self) -> &'static str {
        match self {
            Self::Trend => "Price momentum and market direction",
            Self::Investment => "Risk-adjusted return outlook",
            Self::Sentiment => "Community and institutional mood",
        }
    }
}

/// Coarse coin classification; everything unrecognised is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Other,
}

impl Coin {
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("bitcoin") || mentions_word(name, "btc") {
            Coin::Bitcoin
        } else if lower.contains("ethereum") || mentions_word(name, "eth") {
            Coin::Ethereum
        } else {
            Coin::Other
        }
    }

    fn is_bitcoin(self) -> bool {
        self == Coin::Bitcoin
    }

    fn is_major(self) -> bool {
        matches!(self, Coin::Bitcoin | Coin::Ethereum)
    }
}

const STRATEGY: &[&str] = &[
    "**Dollar-Cost Averaging:** Invest regularly over time",
    "**Portfolio Diversification:** Don't put all eggs in one basket",
    "**Risk Management:** Only invest what you can afford to lose",
    "**Stay Informed:** Follow market news and developments",
];

const RISK_WARNINGS: &[&str] = &[
    "Cryptocurrency markets are highly volatile",
    "Past performance doesn't guarantee future results",
    "Regulatory changes can impact prices significantly",
    "Always do your own research before investing",
];

pub struct CryptoIntelligence;

impl Advisor for CryptoIntelligence {
    type Params = CryptoParams;

    const NAME: &'static str = "crypto_intelligence";
    const DESCRIPTION: &'static str = "Real-time crypto market analysis and investment intelligence";
    const USE_WHEN: &'static str =
        "When you need crypto market insights, trend predictions, or investment opportunities";

    fn parameters() -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required("crypto_name", "Name of the cryptocurrency to analyze"),
            ParamSpec::optional(
                "analysis_type",
                "Type of analysis: 'trend', 'investment', 'sentiment'",
                "trend",
            ),
        ];
        PARAMS
    }

    fn generate(params: &CryptoParams, ctx: &AdviceContext) -> AdviceBundle {
        let mut resolver = Resolver::new();
        let analysis: AnalysisType = resolver.optional("analysis_type", &params.analysis_type);
        let coin = Coin::classify(&params.crypto_name);
        let btc = coin.is_bitcoin();
        let pick = |bitcoin: &'static str, other: &'static str| if btc { bitcoin } else { other };

        AdviceBundle::new(
            Self::NAME,
            format!("Crypto Intelligence Analysis: {}", params.crypto_name),
        )
        .section(overview(
            "market_analysis",
            "📊",
            "Market Analysis",
            vec![
                fact("Cryptocurrency", params.crypto_name.clone()),
                fact("Analysis Type", capitalize(&params.analysis_type)),
                fact("Focus", analysis.focus()),
            ],
            ctx,
        ))
        .section(Section::new("market_trends", "🚀", "Market Trends").facts(vec![
            fact(
                "Current Sentiment",
                if coin.is_major() { "Bullish" } else { "Neutral" },
            ),
            fact("Market Cap Trend", pick("Growing rapidly", "Stable growth")),
            fact("Trading Volume", pick("High activity", "Moderate activity")),
        ]))
        .section(
            Section::new("investment_insights", "💰", "Investment Insights").facts(vec![
                fact("Risk Level", pick("Medium-High", "High")),
                fact("Potential ROI", pick("15-25% annually", "20-40% annually")),
                fact(
                    "Market Position",
                    pick("Leading cryptocurrency", "Emerging player"),
                ),
            ]),
        )
        .section(Section::new("key_factors", "🎯", "Key Factors").numbered([
            "**Institutional Adoption:** Growing interest from major companies".to_string(),
            "**Regulatory Environment:** Evolving but generally positive".to_string(),
            "**Technology Development:** Continuous innovation and upgrades".to_string(),
            format!(
                "**Market Sentiment:** {}",
                pick("Very positive", "Positive")
            ),
        ]))
        .section(Section::new("predictions", "📈", "Predictions").facts(vec![
            fact(
                "Short-term (1-3 months)",
                pick("Bullish trend expected", "Volatile but upward"),
            ),
            fact(
                "Medium-term (6-12 months)",
                pick("Strong growth potential", "Growth potential"),
            ),
            fact(
                "Long-term (1-2 years)",
                pick("Mainstream adoption", "Increased adoption"),
            ),
        ]))
        .section(
            Section::new("investment_strategy", "🔍", "Investment Strategy").numbered(STRATEGY.iter().copied()),
        )
        .section(
            Section::new("risk_warnings", "⚠️", "Risk Warnings").bullets(RISK_WARNINGS.iter().copied()),
        )
        .with_notes(resolver.into_notes())
    }
}
