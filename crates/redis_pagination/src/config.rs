use std::env;

use redis_pagination_core::pagination::{PageSize, PaginationError};

/// Pagination configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when a call does not pass one (default: 25)
    pub default_page_size: PageSize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only read by `RedisListStore::from_config` (`redis` feature).
    pub redis_url: String,
}

const PAGE_SIZE_VAR: &str = "REDIS_PAGINATION_PAGE_SIZE";
const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

impl PaginationConfig {
    /// Load configuration from environment variables, rejecting a bad page size.
    ///
    /// Environment variables:
    /// - `REDIS_PAGINATION_PAGE_SIZE` - Default page size (default: 25)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::UnparsablePageSize` if the page size is set
    /// but is not an integer, and `PaginationError::InvalidPageSize` if it is
    /// zero or negative.
    pub fn try_from_env() -> Result<Self, PaginationError> {
        Self::try_from_values(env::var(PAGE_SIZE_VAR).ok(), env::var("REDIS_URL").ok())
    }

    /// Load configuration from environment variables.
    ///
    /// Same variables as [`PaginationConfig::try_from_env`]. A bad page size
    /// is logged as a warning and replaced by the default.
    pub fn from_env() -> Self {
        let page_size = env::var(PAGE_SIZE_VAR).ok();
        let redis_url = env::var("REDIS_URL").ok();

        let default_page_size = parse_page_size(page_size.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(
                variable = PAGE_SIZE_VAR,
                value = ?page_size,
                error = %e,
                default = %PageSize::DEFAULT,
                "Ignoring invalid page size"
            );
            PageSize::DEFAULT
        });

        Self {
            default_page_size,
            redis_url: redis_url.unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
        }
    }

    fn try_from_values(
        page_size: Option<String>,
        redis_url: Option<String>,
    ) -> Result<Self, PaginationError> {
        Ok(Self {
            default_page_size: parse_page_size(page_size.as_deref())?,
            redis_url: redis_url.unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
        })
    }

    /// Returns a copy with a different default page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.default_page_size = page_size;
        self
    }
}

/// Parses a page size setting. An unset value means the default.
fn parse_page_size(raw: Option<&str>) -> Result<PageSize, PaginationError> {
    let Some(raw) = raw else {
        return Ok(PageSize::DEFAULT);
    };
    let size = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| PaginationError::UnparsablePageSize(raw.to_string()))?;
    PageSize::new(size)
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
