use actix_web::web::{self, Json};

use cve_sources::{search::lookup, Query};

use super::{
    error::{handle_blocking_error, upstream_error, ApplicationError},
    ApplicationContext,
};
use crate::present::SearchBody;

pub async fn search(
    term: web::Path<String>,
    ctx: web::Data<ApplicationContext>,
) -> Result<Json<SearchBody>, ApplicationError> {
    let query = Query::new(&term);

    let result = web::block(move || {
        let sources = ctx.feeds().sources()?;
        lookup(&sources, &query)
    })
    .await
    .map_err(handle_blocking_error)?
    .map_err(upstream_error)?;

    Ok(Json(result.into()))
}
