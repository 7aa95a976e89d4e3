use surrealdb::Response;
use tracing::warn;

use crate::middleware::error::{AppError, AppResult};

/// Looks through the errors of a multi statement query for one raised by a `THROW`
/// carrying one of `markers`.
///
/// When a transaction is cancelled every statement in it reports an error, so the
/// thrown message has to be searched for instead of taking the first error.
/// Returns `Ok(None)` when every statement succeeded and the lowest indexed error when
/// none of them matches a marker.
pub fn find_thrown<'m>(
    res: &mut Response,
    markers: &[&'m str],
) -> Result<Option<&'m str>, surrealdb::Error> {
    let mut errors: Vec<(usize, surrealdb::Error)> = res.take_errors().into_iter().collect();
    if errors.is_empty() {
        return Ok(None);
    }
    errors.sort_by_key(|(ind, _)| *ind);

    for (_, err) in errors.iter() {
        let msg = err.to_string();
        if let Some(marker) = markers.iter().find(|m| msg.contains(*m)) {
            return Ok(Some(*marker));
        }
    }
    Err(errors.remove(0).1)
}

pub fn with_not_found_err<T>(opt: Option<T>, ident: &str) -> AppResult<T> {
    match opt {
        None => {
            warn!("record {ident} not found");
            Err(AppError::EntityFailIdNotFound {
                ident: ident.to_string(),
            })
        }
        Some(val) => Ok(val),
    }
}
