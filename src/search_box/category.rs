use tracing::instrument;

use super::{
    CATEGORY_PATH, CategorySearchQuery, FeatureCollection, LIST_CATEGORIES_PATH,
    ListCategoriesQuery, ListCategoriesResponse, SarOptions, SearchBox, add_navigation,
    validate_navigation,
};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::{Query, check_limit, check_proximity, check_text};
use crate::util::path_with_id;

impl SearchBox<'_> {
    /// POIs of one category around a point, inside a box, or along a route.
    #[instrument(name = "search_box.category", skip_all, fields(category = %req.category_id))]
    pub fn category(&self, req: &CategorySearchQuery) -> Result<FeatureCollection, Error> {
        validate_category(req)?;
        let path = path_with_id(CATEGORY_PATH, &req.category_id);
        let query = build_category_query(self.token, req);
        self.get(Endpoint::CategorySearch, &path, &query)
    }

    /// Every category id accepted by [`category`](Self::category).
    #[instrument(name = "search_box.list_categories", skip_all)]
    pub fn list_categories(&self, req: &ListCategoriesQuery) -> Result<ListCategoriesResponse, Error> {
        let mut query = Query::with_token(self.token);
        query.opt_str("language", req.language.as_deref());
        self.get(Endpoint::ListCategories, LIST_CATEGORIES_PATH, &query)
    }
}

fn validate_category(req: &CategorySearchQuery) -> Result<(), ValidationError> {
    check_text("category_id", &req.category_id, None)?;
    if !req.has_search_area() {
        return Err(ValidationError::NoSearchArea);
    }
    check_limit(req.limit, 1, 25)?;
    check_proximity(req.proximity.as_ref())?;
    validate_navigation(req.navigation.as_ref())?;
    match &req.sar {
        Some(sar) => sar.route.iter().try_for_each(|c| c.validate()),
        None => Ok(()),
    }
}

fn build_category_query(token: &str, req: &CategorySearchQuery) -> Query {
    let mut q = Query::with_token(token);
    q.proximity(req.proximity.as_ref())
        .bbox(req.bbox.as_ref())
        .list("country", &req.country)
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit);
    add_navigation(&mut q, req.navigation.as_ref());
    if let Some(sar) = &req.sar {
        add_sar(&mut q, sar);
    }
    q
}

fn add_sar(q: &mut Query, sar: &SarOptions) {
    q.opt_str("sar_type", sar.sar_type.as_deref())
        .route(&sar.route)
        .opt_value("time_deviation", sar.time_deviation);
}
