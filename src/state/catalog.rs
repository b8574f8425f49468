#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use uuid::Uuid;

use crate::net::types::{Category, Product};
use crate::state::request_gen::RequestGen;

/// Default page size for the products grid.
pub const PAGE_SIZE: u32 = 12;

/// Sort orders the products endpoint accepts. The backend validates
/// `sort_by` against `price_asc|price_desc|name_asc|name_desc|newest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            ProductSort::Name => "name_asc",
            ProductSort::PriceAsc => "price_asc",
            ProductSort::PriceDesc => "price_desc",
        }
    }
}

/// Browse inputs for the products list: pagination, category filter,
/// sort. Equality drives the watch-and-refetch binding, so any change
/// here means exactly one re-fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub skip: u32,
    pub limit: u32,
    pub category_id: Option<Uuid>,
    pub sort: ProductSort,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: PAGE_SIZE,
            category_id: None,
            sort: ProductSort::default(),
        }
    }
}

impl ProductQuery {
    /// Render as a URL query string, leading `?` included.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = format!("?skip={}&limit={}", self.skip, self.limit);
        if let Some(category_id) = self.category_id {
            out.push_str(&format!("&category_id={category_id}"));
        }
        out.push_str(&format!("&sort_by={}", self.sort.as_param()));
        out
    }

    pub fn next_page(&mut self) {
        self.skip += self.limit;
    }

    pub fn prev_page(&mut self) {
        self.skip = self.skip.saturating_sub(self.limit);
    }

    /// Changing the filter restarts pagination from the first page.
    pub fn set_category(&mut self, category_id: Option<Uuid>) {
        self.category_id = category_id;
        self.skip = 0;
    }

    pub fn set_sort(&mut self, sort: ProductSort) {
        self.sort = sort;
        self.skip = 0;
    }
}

/// Catalog browse state: the loaded product page, the category list,
/// and the query that produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub loading: bool,
    pub query: ProductQuery,
    generation: RequestGen,
}

impl CatalogState {
    /// Start a products fetch; supersedes any fetch still in flight.
    pub fn begin(&mut self) -> RequestGen {
        self.loading = true;
        self.generation.begin()
    }

    /// Apply a fetched page if `ticket` is still current. Returns
    /// whether the result was accepted.
    pub fn apply(&mut self, ticket: RequestGen, products: Vec<Product>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.products = products;
        self.loading = false;
        true
    }

    /// Record a failed fetch if `ticket` is still current.
    pub fn fail(&mut self, ticket: RequestGen) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Drop loaded data on logout.
    pub fn clear(&mut self) {
        self.products.clear();
        self.categories.clear();
        self.loading = false;
        self.generation.begin();
    }
}
