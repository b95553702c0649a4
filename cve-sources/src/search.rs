use std::time::Instant;

use crate::normalize::NormalizedResult;
use crate::query::{Query, QueryKind};
use crate::sources::{Feed, FetchError};

/// Classifies `query`, asks `feed` for the matching data and normalizes it.
pub fn lookup(feed: &dyn Feed, query: &Query) -> Result<NormalizedResult, FetchError> {
    let kind = query.kind();
    log::info!("searching query: {:?} as {:?} ...", query.text(), kind);

    let start = Instant::now();

    let result = match kind {
        QueryKind::CveId => {
            let record = feed.fetch_by_id(query.text())?;
            NormalizedResult::from_record(query.text(), record)
        }
        QueryKind::Keyword => {
            let records = feed.search_by_keyword(query.text())?;
            log::info!("found {} matches in {:?}", records.len(), start.elapsed());
            NormalizedResult::from_matches(query.text(), records)
        }
    };

    log::debug!("lookup completed in {:?}", start.elapsed());

    Ok(result)
}
