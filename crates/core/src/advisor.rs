// The advisor contract shared by all ten tools

use crate::bundle::AdviceBundle;
use crate::context::AdviceContext;
use crate::error::{AdviceError, AdviceResult};
use serde::de::DeserializeOwned;

/// Describes one input parameter of an advisor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// `None` means the parameter is required
    pub default: Option<&'static str>,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            default: None,
        }
    }

    pub const fn optional(
        name: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            default: Some(default),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A stateless advice generator.
///
/// `generate` never fails: every well-typed argument set produces a
/// bundle. Only `parse` can fail, when the arguments are malformed.
pub trait Advisor: Send + Sync + 'static {
    type Params: DeserializeOwned + Send;

    /// Tool name exposed over MCP
    const NAME: &'static str;
    /// What the tool does
    const DESCRIPTION: &'static str;
    /// When a caller should reach for it
    const USE_WHEN: &'static str;

    fn parameters() -> &'static [ParamSpec];

    fn generate(params: &Self::Params, ctx: &AdviceContext) -> AdviceBundle;

    /// Decode raw JSON arguments. `null` is treated as an empty object.
    fn parse(arguments: serde_json::Value) -> AdviceResult<Self::Params> {
        let arguments = match arguments {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            serde_json::Value::Object(map) => serde_json::Value::Object(map),
            other => {
                return Err(AdviceError::NotAnObject {
                    tool: Self::NAME,
                    found: json_type_name(&other),
                })
            }
        };

        serde_json::from_value(arguments).map_err(|source| AdviceError::InvalidArguments {
            tool: Self::NAME,
            source,
        })
    }

    /// Parse and generate in one step
    fn run(arguments: serde_json::Value, ctx: &AdviceContext) -> AdviceResult<AdviceBundle> {
        let params = Self::parse(arguments)?;
        Ok(Self::generate(&params, ctx))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Standard opening section: the caller's inputs plus the analysis date
pub(crate) fn overview(
    id: &str,
    icon: &str,
    heading: &str,
    mut facts: Vec<crate::bundle::Fact>,
    ctx: &AdviceContext,
) -> crate::bundle::Section {
    facts.push(crate::bundle::fact("Analysis Date", ctx.analysis_date()));
    crate::bundle::Section::new(id, icon, heading).facts(facts)
}
