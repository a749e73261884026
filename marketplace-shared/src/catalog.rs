//! Listing helpers: search, pagination and the product catalog query.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::models::{Id, Product, Store, Tag, User};

/// Page size of the public store grid.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Records that can be searched by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Store {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for User {
    fn name(&self) -> &str {
        &self.name
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Items whose name contains `term`, ignoring case. A blank term keeps everything.
#[must_use]
pub fn filter_by_name<T: Named + Clone>(items: &[T], term: &str) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || contains_folded(item.name(), &needle))
        .cloned()
        .collect()
}

/// Users whose full name or email contains `term`, ignoring case.
#[must_use]
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let needle = term.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || contains_folded(&user.full_name(), &needle)
                || contains_folded(&user.email, &needle)
        })
        .cloned()
        .collect()
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// 1-based, always within `1..=total_pages` (or 1 for an empty list).
    pub page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slice out page `page` (1-based). Out-of-range pages are clamped.
    #[must_use]
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = items.len().div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));
        let start = (page - 1) * per_page;
        let end = (start + per_page).min(items.len());
        Self {
            items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
            page,
            total_pages,
        }
    }

    /// Whether a page exists before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a page exists after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Client-side ordering of the product catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductSort {
    /// Most expensive first.
    PriceHigh,
    /// Cheapest first.
    PriceLow,
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

impl ProductSort {
    /// Every ordering, in the order the sort menu lists them.
    pub const ALL: [Self; 4] = [Self::PriceHigh, Self::PriceLow, Self::Newest, Self::Oldest];

    /// Stable identifier used by the sort select.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Inverse of [`ProductSort::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.key() == key)
    }
}

/// Search, tag filter and ordering for the catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Name substring, case-insensitive.
    pub search: String,
    /// A product matches when it carries at least one of these.
    pub tags: Vec<String>,
    /// Ordering applied after filtering.
    pub sort: ProductSort,
}

impl ProductQuery {
    /// Filter and order `products`. Ties keep their original order.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut matches: Vec<Product> = filter_by_name(products, &self.search)
            .into_iter()
            .filter(|product| self.matches_tags(product))
            .collect();

        match self.sort {
            ProductSort::PriceHigh => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
            ProductSort::PriceLow => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ProductSort::Newest => matches.sort_by(|a, b| by_date(a, b, true)),
            ProductSort::Oldest => matches.sort_by(|a, b| by_date(a, b, false)),
        }
        matches
    }

    fn matches_tags(&self, product: &Product) -> bool {
        self.tags.is_empty()
            || product
                .tags
                .iter()
                .any(|tag| self.tags.iter().any(|wanted| *wanted == tag.tag_name))
    }

    /// Toggle a tag in the filter.
    pub fn toggle_tag(&mut self, name: &str) {
        if let Some(position) = self.tags.iter().position(|tag| tag == name) {
            self.tags.remove(position);
        } else {
            self.tags.push(name.to_string());
        }
    }
}

// Undated products go last in both directions.
fn by_date(a: &Product, b: &Product, newest_first: bool) -> Ordering {
    match (a.created(), b.created()) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Attach each tag to the product it belongs to.
#[must_use]
pub fn attach_tags(mut products: Vec<Product>, tags: &[Tag]) -> Vec<Product> {
    let mut by_product: HashMap<Id, Vec<Tag>> = HashMap::new();
    for tag in tags {
        if let Some(product_id) = tag.product_id {
            by_product.entry(product_id).or_default().push(tag.clone());
        }
    }
    for product in &mut products {
        product.tags = by_product.remove(&product.id).unwrap_or_default();
    }
    products
}

/// Sorted, de-duplicated tag names.
#[must_use]
pub fn distinct_tag_names(tags: &[Tag]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.tag_name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
