pub mod links;
pub mod normalize;
pub mod query;
pub mod record;
pub mod search;
pub mod severity;
pub mod sources;

pub use normalize::NormalizedResult;
pub use query::{classify, Query, QueryKind};
pub use record::{KnownExploited, VulnerabilityRecord};
pub use sources::{Endpoints, Feed, FetchError, Sources};
