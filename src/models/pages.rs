use serde::Serialize;

/// One page of a listing plus the bookkeeping a client needs to paginate.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl<T> Page<T> {
    /// `pages` is the ceiling of `total / limit`; an empty table has zero
    /// pages.
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };

        Self {
            items,
            page,
            limit,
            total,
            pages,
        }
    }
}
