//! Sort and page engine
//!
//! Sorting is stable: records that compare equal keep their input order in
//! both directions. Paging never fails; out-of-range requests are clamped.

use std::cmp::Ordering;

use isoportal_api_types::ContainerRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MIN_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort keys accepted by inventory listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Code,
    Product,
    Status,
    Client,
    ExpectedReleaseAt,
    DaysInStatus,
}

impl SortKey {
    /// Parse a sort key. Unknown or missing keys fall back to code.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return SortKey::Code;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "product" | "produto" => SortKey::Product,
            "status" => SortKey::Status,
            "client" | "cliente" => SortKey::Client,
            "expectedreleaseat" | "previsaoliberacao" => SortKey::ExpectedReleaseAt,
            "daysinstatus" | "diasnostatus" => SortKey::DaysInStatus,
            _ => SortKey::Code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Code => "code",
            SortKey::Product => "product",
            SortKey::Status => "status",
            SortKey::Client => "client",
            SortKey::ExpectedReleaseAt => "expectedReleaseAt",
            SortKey::DaysInStatus => "daysInStatus",
        }
    }
}

/// Sort records in place by `key`.
///
/// `days_in_status` without a value sorts last in both directions. A missing
/// release date or product compares as the smallest value.
pub fn sort_records(records: &mut [ContainerRecord], key: SortKey, ascending: bool) {
    let compare = |a: &ContainerRecord, b: &ContainerRecord| -> Ordering {
        match key {
            SortKey::Code => a.code.cmp(&b.code),
            SortKey::Product => a.product.cmp(&b.product),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::Client => a.client.cmp(&b.client),
            SortKey::ExpectedReleaseAt => a.expected_release_at.cmp(&b.expected_release_at),
            SortKey::DaysInStatus => {
                let missing = if ascending { i64::MAX } else { i64::MIN };
                a.days_in_status
                    .unwrap_or(missing)
                    .cmp(&b.days_in_status.unwrap_or(missing))
            }
        }
    };

    if ascending {
        records.sort_by(compare);
    } else {
        records.sort_by(|a, b| compare(b, a));
    }
}

/// Clamp a requested page size to `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`
pub fn clamp_page_size(requested: Option<i64>) -> u32 {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE as i64)
        .clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u32
}

/// One page of a sorted result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: u32,
    /// The page actually served, after clamping
    pub page: u32,
    pub page_size: u32,
}

/// Window `items` to one page.
///
/// The page size is clamped first, then the page to `[1, total_pages]`.
/// An empty input yields one empty page.
pub fn paginate<T>(items: Vec<T>, page: Option<i64>, page_size: Option<i64>) -> PageResult<T> {
    let page_size = clamp_page_size(page_size);
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size as usize) as u32
    };
    let page = page
        .unwrap_or(1)
        .max(1)
        .min(total_pages as i64) as u32;

    let skip = (page as usize - 1) * page_size as usize;
    let items = items.into_iter().skip(skip).take(page_size as usize).collect();

    PageResult {
        items,
        total_count,
        total_pages,
        page,
        page_size,
    }
}

/// Sort then page
pub fn sort_and_page(
    mut records: Vec<ContainerRecord>,
    key: SortKey,
    ascending: bool,
    page: Option<i64>,
    page_size: Option<i64>,
) -> PageResult<ContainerRecord> {
    sort_records(&mut records, key, ascending);
    paginate(records, page, page_size)
}
