//! Catalog Query Engine.
//!
//! Derives a display page from the full product list under a [`QueryState`].
//! Both the storefront search and the owner dashboard run through
//! [`run_query`]; the input slice is never reordered or mutated.

use std::cmp::Ordering;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::product::value_objects::Category;

use super::entry::CatalogItem;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [6, 9, 12, 24];
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Price bands offered by the storefront search.
pub const STOREFRONT_PRICE_BANDS: [&str; 5] = ["all", "0-1000", "1000-2000", "2000-4000", "4000+"];

/// Which fields the free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// name, sku, category, location
    #[default]
    Dashboard,
    /// name, description, category, location
    Storefront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Entries of the category filter menu: "all" first, then each category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::all().into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        trimmed
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| format!("Invalid category filter: {}", s))
    }
}

/// Numeric price filter. `Between` is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceBand {
    #[default]
    Any,
    Between { min: f64, max: f64 },
    AtLeast(f64),
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceBand::Any => true,
            PriceBand::Between { min, max } => price >= min && price <= max,
            PriceBand::AtLeast(floor) => price >= floor,
        }
    }
}

impl FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || format!("Invalid price band: {}", s);

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(PriceBand::Any);
        }
        if let Some(floor) = trimmed.strip_suffix('+') {
            let floor = floor.trim().parse::<f64>().map_err(|_| invalid())?;
            return Ok(PriceBand::AtLeast(floor));
        }
        let (min, max) = trimmed.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse::<f64>().map_err(|_| invalid())?;
        let max = max.trim().parse::<f64>().map_err(|_| invalid())?;
        if min > max {
            return Err(invalid());
        }
        Ok(PriceBand::Between { min, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Price,
    Stock,
    Name,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortKey::CreatedAt),
            "price" => Ok(SortKey::Price),
            "stock" => Ok(SortKey::Stock),
            "name" => Ok(SortKey::Name),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Everything that drives one rendering of a product list.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub text: String,
    pub scope: SearchScope,
    pub category: CategoryFilter,
    pub price_band: PriceBand,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            text: String::new(),
            scope: SearchScope::default(),
            category: CategoryFilter::default(),
            price_band: PriceBand::default(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a, T> {
    pub items: Vec<&'a T>,
    /// Page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Number of pages for `matches` items; an empty list still has one page.
pub fn total_pages(matches: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    matches.div_ceil(page_size).max(1)
}

fn matches_text<T: CatalogItem>(item: &T, needle: &str, scope: SearchScope) -> bool {
    let details = item.details();
    let contains = |field: &str| field.to_lowercase().contains(needle);

    let scoped = match scope {
        SearchScope::Dashboard => contains(&details.sku),
        SearchScope::Storefront => details.description.as_deref().is_some_and(contains),
    };

    contains(&details.name)
        || scoped
        || contains(details.category.as_str())
        || contains(&details.location)
}

/// Alphabetical name order: letters first, then accents, then case with
/// lowercase ahead of uppercase. Byte order is the last resort.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let base = |name: &str| -> String {
        name.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let accented = |name: &str| -> String { name.nfd().flat_map(char::to_lowercase).collect() };
    let cased = |name: &str| -> Vec<bool> { name.nfd().map(char::is_uppercase).collect() };

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| cased(a).cmp(&cased(b)))
        .then_with(|| a.cmp(b))
}

fn compare<T: CatalogItem>(a: &T, b: &T, key: SortKey) -> Ordering {
    let (left, right) = (a.details(), b.details());
    match key {
        SortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortKey::Price => left.price.total_cmp(&right.price),
        SortKey::Stock => left.stock.cmp(&right.stock),
        SortKey::Name => compare_names(&left.name, &right.name),
    }
}

/// Text, category and price filters followed by a stable sort.
pub fn filter_and_sort<'a, T: CatalogItem>(items: &'a [T], state: &QueryState) -> Vec<&'a T> {
    let needle = state.text.to_lowercase();
    let searching = !state.text.trim().is_empty();

    let mut matches: Vec<&T> = items
        .iter()
        .filter(|item| !searching || matches_text(*item, &needle, state.scope))
        .filter(|item| match state.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.details().category == category,
        })
        .filter(|item| state.price_band.contains(item.details().price))
        .collect();

    matches.sort_by(|a, b| state.sort_direction.apply(compare(*a, *b, state.sort_key)));
    matches
}

/// Slices one page out of already filtered matches. Out-of-range pages reset to 1.
pub fn paginate<'a, T>(matches: Vec<&'a T>, page: usize, page_size: usize) -> QueryPage<'a, T> {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let total_matches = matches.len();
    let total_pages = total_pages(total_matches, page_size);
    let page = if page == 0 || page > total_pages { 1 } else { page };

    let items = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    QueryPage {
        items,
        page,
        total_pages,
        total_matches,
    }
}

pub fn run_query<'a, T: CatalogItem>(items: &'a [T], state: &QueryState) -> QueryPage<'a, T> {
    paginate(filter_and_sort(items, state), state.page, state.page_size)
}
