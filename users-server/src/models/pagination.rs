//! Pagination types for the users list

use serde::{Deserialize, Serialize};

/// Default page number
const DEFAULT_PAGE: i64 = 1;

/// Default items per page
const DEFAULT_LIMIT: i64 = 10;

/// Pagination parameters
///
/// No upper bound is placed on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub limit: i64,
}

impl PageRequest {
    /// Create pagination, replacing non-positive values with the defaults.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            limit: if limit >= 1 { limit } else { DEFAULT_LIMIT },
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
///
/// Kept as raw strings so that junk input falls back to defaults instead of
/// failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// Collect params from raw query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if params.page.is_none() => params.page = Some(value),
                "limit" if params.limit.is_none() => params.limit = Some(value),
                _ => {}
            }
        }
        params
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        Self::new(
            lenient(params.page.as_deref(), DEFAULT_PAGE),
            lenient(params.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

fn lenient(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// `meta.pagination` block of the list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total rows in the table
    pub count: i64,
    /// Page number used for this response
    pub current_page: i64,
    /// Page size used for this response
    pub items: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub pagination: PaginationMeta,
}

/// List response wrapper: `{data: [...], meta: {pagination: {...}}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, total: i64, page: PageRequest) -> Self {
        Self {
            data,
            meta: Meta {
                pagination: PaginationMeta {
                    count: total,
                    current_page: page.page,
                    items: page.limit,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn offset_saturates() {
        let p = PageRequest::new(i64::MAX, i64::MAX);
        assert_eq!(p.offset(), i64::MAX);
    }

    #[test]
    fn absent_params_use_defaults() {
        let p = PageRequest::from(params(None, None));
        assert_eq!(p, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn junk_params_use_defaults() {
        let p = PageRequest::from(params(Some("abc"), Some("")));
        assert_eq!(p, PageRequest::default());

        let p = PageRequest::from(params(Some("0"), Some("-3")));
        assert_eq!(p, PageRequest::default());

        let p = PageRequest::from(params(Some("2.5"), Some("1e3")));
        assert_eq!(p, PageRequest::default());
    }

    #[test]
    fn valid_params_are_kept() {
        let p = PageRequest::from(params(Some("4"), Some("25")));
        assert_eq!(p, PageRequest { page: 4, limit: 25 });
    }

    #[test]
    fn first_repeated_key_wins() {
        let pairs = vec![
            ("page".to_string(), "3".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("page".to_string(), "9".to_string()),
            ("limit".to_string(), "x".to_string()),
            ("limit".to_string(), "5".to_string()),
        ];

        let parsed = PageParams::from_pairs(pairs);
        assert_eq!(parsed, params(Some("3"), Some("x")));
        assert_eq!(PageRequest::from(parsed), PageRequest { page: 3, limit: 10 });
    }

    #[test]
    fn limit_has_no_upper_bound() {
        let p = PageRequest::from(params(None, Some("100000")));
        assert_eq!(p.limit(), 100_000);
    }

    #[test]
    fn envelope_shape() {
        let envelope = Envelope::new(vec![1, 2], 42, PageRequest::new(3, 2));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "data": [1, 2],
                "meta": {"pagination": {"count": 42, "current_page": 3, "items": 2}}
            })
        );
    }

    #[test]
    fn empty_page_serializes_as_array() {
        let envelope: Envelope<u8> = Envelope::new(vec![], 0, PageRequest::default());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
