//! Product filter widget — price range, category and sort controls.

mod products_filter;

pub use products_filter::ProductsFilter;
