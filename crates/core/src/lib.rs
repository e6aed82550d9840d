// Core advice generation for the Lifestyle Suite

pub mod advisor;
pub mod bundle;
pub mod choice;
pub mod context;
pub mod error;
pub mod tools;

pub use advisor::{Advisor, ParamSpec};
pub use bundle::{fact, AdviceBundle, Block, Fact, Section};
pub use choice::{Choice, Resolver};
pub use context::AdviceContext;
pub use error::{AdviceError, AdviceResult};
