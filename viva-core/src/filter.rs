//! Client-side filtering over a fetched tip list.

use crate::types::Tip;

/// Category and free-text filter over tips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipFilter {
    category: Option<String>,
    search: Option<String>,
}

impl TipFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to tips whose category equals `category`, ignoring case.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().trim().to_lowercase();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Restricts to tips whose content or category contains `search`,
    /// ignoring case. Blank input matches everything.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into().trim().to_lowercase();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    pub fn matches(&self, tip: &Tip) -> bool {
        let category = tip.category.as_deref().map(|c| c.trim().to_lowercase());

        if let Some(wanted) = &self.category
            && category.as_deref() != Some(wanted.as_str())
        {
            return false;
        }

        match &self.search {
            None => true,
            Some(needle) => {
                tip.content.to_lowercase().contains(needle.as_str())
                    || category.is_some_and(|c| c.contains(needle.as_str()))
            }
        }
    }

    /// Matching tips in their original order.
    pub fn apply<'a>(&self, tips: &'a [Tip]) -> Vec<&'a Tip> {
        tips.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Tip> {
        vec![
            Tip::new("Drink a glass of water after waking").with_category("Hydration"),
            Tip::new("Take the stairs").with_category("activity"),
            Tip::new("Add vegetables to every meal").with_category("nutrition"),
            Tip::new("Carry a water bottle"),
            Tip::new("Walk after dinner").with_category("activity"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let tips = sample();
        let filter = TipFilter::new().with_search("   ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&tips).len(), tips.len());
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let tips = sample();
        let hits = TipFilter::new().with_category("HYDRATION").apply(&tips);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "Drink a glass of water after waking");
    }

    #[test]
    fn test_search_over_content_and_category() {
        let tips = sample();
        let hits = TipFilter::new().with_search("Water").apply(&tips);
        assert_eq!(hits.len(), 2);

        let hits = TipFilter::new().with_search("activ").apply(&tips);
        assert_eq!(
            hits.iter().map(|t| t.content.as_str()).collect::<Vec<_>>(),
            vec!["Take the stairs", "Walk after dinner"]
        );
    }

    #[test]
    fn test_category_and_search_combine() {
        let tips = sample();
        let hits = TipFilter::new()
            .with_category("activity")
            .with_search("dinner")
            .apply(&tips);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "Walk after dinner");

        let none = TipFilter::new()
            .with_category("nutrition")
            .with_search("stairs")
            .apply(&tips);
        assert!(none.is_empty());
    }

    #[test]
    fn test_uncategorized_tips_never_match_a_category() {
        let tips = sample();
        let hits = TipFilter::new().with_category("sun").apply(&tips);
        assert!(hits.is_empty());
    }
}
