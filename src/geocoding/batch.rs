use serde::Serialize;
use tracing::{debug, instrument};

use super::{BATCH_PATH, BatchQuery, BatchResponse, Geocoding};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::Query;

/// Upper bound on queries per batch call.
pub const MAX_BATCH_QUERIES: usize = 1000;

/// A validated list of 1 to [`MAX_BATCH_QUERIES`] batch entries.
///
/// Serializes as the `{"queries": [...]}` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    queries: Vec<BatchQuery>,
}

impl BatchRequest {
    /// Validates the batch size and every entry.
    pub fn new(queries: Vec<BatchQuery>) -> Result<Self, ValidationError> {
        if queries.is_empty() || queries.len() > MAX_BATCH_QUERIES {
            return Err(ValidationError::BatchSize {
                count: queries.len(),
                max: MAX_BATCH_QUERIES,
            });
        }
        for (index, query) in queries.iter().enumerate() {
            validate_batch_query(query, index)?;
        }
        Ok(Self { queries })
    }

    pub fn queries(&self) -> &[BatchQuery] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Always `false`: an empty batch cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl TryFrom<Vec<BatchQuery>> for BatchRequest {
    type Error = ValidationError;

    fn try_from(queries: Vec<BatchQuery>) -> Result<Self, Self::Error> {
        Self::new(queries)
    }
}

pub(crate) fn validate_batch_query(query: &BatchQuery, index: usize) -> Result<(), ValidationError> {
    match (query.has_text(), &query.coordinate) {
        (false, None) => Err(ValidationError::BatchQueryEmpty { index }),
        (true, Some(_)) => Err(ValidationError::BatchQueryAmbiguous { index }),
        (false, Some(c)) => c
            .validate()
            .map_err(|e| ValidationError::BatchQueryInvalid {
                index,
                source: Box::new(e),
            }),
        (true, None) => Ok(()),
    }
}

impl Geocoding<'_> {
    /// Runs forward and reverse lookups in one `POST`. Results come back in
    /// request order.
    #[instrument(name = "geocoding.batch", skip_all, fields(queries = req.len()))]
    pub fn batch(&self, req: &BatchRequest) -> Result<BatchResponse, Error> {
        let query = Query::with_token(self.token);
        let resp: BatchResponse = self
            .transport
            .post(BATCH_PATH, &query, req)
            .map_err(|e| Error::request(Endpoint::BatchGeocode, e))?;
        debug!(results = resp.results.len(), "batch geocoding completed");
        Ok(resp)
    }
}
