pub mod request;

pub use request::{Mode, RequestDescriptor, SkillBracket, Tier, Weighting};
