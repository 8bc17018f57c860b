// SPDX-License-Identifier: MPL-2.0
//! Project categories and the gallery category filter.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Category
// =============================================================================

/// Closed set of categories a portfolio project can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Commercial and product photography.
    Commercial,
    /// Cafe and beverage photography.
    CafeBeverage,
    /// Architectural and interior photography.
    ArchitectureInterior,
    /// Food photography.
    Food,
    /// Portrait photography.
    Portrait,
    /// Exhibition and event coverage.
    Exhibition,
    /// Animal photography.
    Animal,
}

impl Category {
    /// All categories, in the order the gallery presents them.
    pub const ALL: [Category; 7] = [
        Category::Commercial,
        Category::CafeBeverage,
        Category::ArchitectureInterior,
        Category::Food,
        Category::Portrait,
        Category::Exhibition,
        Category::Animal,
    ];

    /// Stable identifier used in catalog files and settings.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Commercial => "commercial",
            Category::CafeBeverage => "cafe-beverage",
            Category::ArchitectureInterior => "architecture-interior",
            Category::Food => "food",
            Category::Portrait => "portrait",
            Category::Exhibition => "exhibition",
            Category::Animal => "animal",
        }
    }

    /// Returns the i18n message key for this category's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Commercial => "category-commercial",
            Category::CafeBeverage => "category-cafe-beverage",
            Category::ArchitectureInterior => "category-architecture-interior",
            Category::Food => "category-food",
            Category::Portrait => "category-portrait",
            Category::Exhibition => "category-exhibition",
            Category::Animal => "category-animal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a category identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// CategoryFilter
// =============================================================================

/// Active gallery filter: every project, or only one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show the whole catalog.
    #[default]
    All,
    /// Show only projects of the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Every filter chip shown above the grid, `All` first.
    #[must_use]
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Returns `true` if a project of `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Returns `true` if this filter narrows the catalog.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Returns the i18n message key for this filter's chip label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CategoryFilter::All => "category-all",
            CategoryFilter::Only(category) => category.i18n_key(),
        }
    }

    /// Config spelling of this filter; parses back through [`FromStr`].
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn filter_slugs_round_trip() {
        for filter in CategoryFilter::chips() {
            assert_eq!(filter.slug().parse::<CategoryFilter>(), Ok(filter));
        }
    }

    #[test]
    fn from_str_accepts_loose_spelling() {
        assert_eq!("Cafe Beverage".parse(), Ok(Category::CafeBeverage));
        assert_eq!("ARCHITECTURE_INTERIOR".parse(), Ok(Category::ArchitectureInterior));
        assert!("landscape".parse::<Category>().is_err());
    }

    #[test]
    fn all_filter_matches_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
        assert!(!CategoryFilter::All.is_active());
    }

    #[test]
    fn only_filter_matches_its_category() {
        let filter = CategoryFilter::Only(Category::Food);
        assert!(filter.matches(Category::Food));
        assert!(!filter.matches(Category::Portrait));
        assert!(filter.is_active());
    }

    #[test]
    fn chips_start_with_all() {
        let chips = CategoryFilter::chips();
        assert_eq!(chips.first(), Some(&CategoryFilter::All));
        assert_eq!(chips.len(), Category::ALL.len() + 1);
    }

    #[test]
    fn filter_parses_all_keyword() {
        assert_eq!("All".parse(), Ok(CategoryFilter::All));
        assert_eq!("food".parse(), Ok(CategoryFilter::Only(Category::Food)));
    }
}
