//! The pure filter → sort → paginate function.

use std::cmp::Ordering;

use crate::model::Company;
use crate::query::{CompanyQuery, QueryPage, SortBy, SortDir};

/// Runs one discovery query over the collection.
///
/// Pure and deterministic: no I/O, no mutation of the input, identical
/// output for identical `(collection, query)`. Malformed parameters never
/// reach this function; the [`CompanyQuery`] boundary absorbs them.
///
/// The sort is stable in both directions: entries with equal sort keys keep
/// their relative collection order, which keeps pages consistent while users
/// navigate.
#[must_use]
pub fn run_query(collection: &[Company], query: &CompanyQuery) -> QueryPage<Company> {
    let mut matched: Vec<&Company> = collection
        .iter()
        .filter(|company| matches(company, query))
        .collect();

    // Vec::sort_by is stable; Ordering::reverse keeps Equal as Equal, so
    // descending order never reorders ties.
    matched.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by);
        match query.sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    let total = matched.len();
    let page_size = query.page_size.max(1) as usize;
    let total_pages = total.div_ceil(page_size).max(1);
    let page = (query.page as usize).clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let data = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    QueryPage {
        data,
        total: total as u64,
        page: page as u32,
        total_pages: total_pages as u32,
    }
}

/// Applies all active filter predicates conjunctively.
fn matches(company: &Company, query: &CompanyQuery) -> bool {
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        let hit = company.name.to_lowercase().contains(&needle)
            || company.description.to_lowercase().contains(&needle)
            || company
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    if let Some(sector) = &query.sector
        && company.sector.as_ref() != sector
    {
        return false;
    }

    if let Some(stage) = &query.stage
        && company.stage.as_ref() != stage
    {
        return false;
    }

    if let Some(location) = &query.location
        && company.location != *location
    {
        return false;
    }

    true
}

/// Compares two companies by the ascending sort key.
fn compare(a: &Company, b: &Company, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => cmp_ignore_case(&a.name, &b.name),
        SortBy::Founded => a.founded.cmp(&b.founded),
        SortBy::Employees => a.employees_lower_bound().cmp(&b.employees_lower_bound()),
    }
}

/// Case-insensitive string ordering without allocating lowercased copies.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sector, Stage};

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.into(),
            name: name.into(),
            website: format!("https://{id}.test"),
            description: "A test company".into(),
            sector: Sector::SaaS,
            stage: Stage::Seed,
            location: "Berlin".into(),
            founded: 2020,
            employees: "11-50".into(),
            tags: vec![],
            signals: vec![],
            enriched: None,
        }
    }

    fn fixture() -> Vec<Company> {
        vec![
            Company {
                sector: Sector::FinTech,
                stage: Stage::SeriesA,
                location: "London".into(),
                founded: 2018,
                employees: "101-500".into(),
                description: "AI-powered payment reconciliation".into(),
                tags: vec!["payments".into(), "b2b".into()],
                ..company("c-1", "Ledgerline")
            },
            Company {
                sector: Sector::Climate,
                stage: Stage::Seed,
                location: "Berlin".into(),
                founded: 2021,
                employees: "1-10".into(),
                description: "Carbon accounting for manufacturers".into(),
                tags: vec!["carbon".into()],
                ..company("c-2", "Verdant")
            },
            Company {
                sector: Sector::SaaS,
                stage: Stage::Seed,
                location: "Berlin".into(),
                founded: 2021,
                employees: "11-50".into(),
                description: "Workflow automation platform".into(),
                tags: vec!["automation".into(), "ai".into()],
                ..company("c-3", "Taskforge")
            },
            Company {
                sector: Sector::HealthTech,
                stage: Stage::PreSeed,
                location: "Paris".into(),
                founded: 2023,
                employees: "1-10".into(),
                description: "Remote patient monitoring".into(),
                ..company("c-4", "arbor health")
            },
        ]
    }

    fn ids(page: &QueryPage<Company>) -> Vec<&str> {
        page.data.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn repeated_invocation_is_deterministic() {
        let collection = fixture();
        let query = CompanyQuery::new(2)
            .with_sort(SortBy::Founded, SortDir::Desc)
            .with_page(1);

        let first = run_query(&collection, &query);
        let second = run_query(&collection, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn input_collection_is_not_mutated() {
        let collection = fixture();
        let before = collection.clone();

        let query = CompanyQuery::new(2).with_sort(SortBy::Founded, SortDir::Desc);
        let _ = run_query(&collection, &query);

        assert_eq!(collection, before);
    }

    #[test]
    fn total_is_independent_of_pagination() {
        let collection = fixture();

        let all = run_query(&collection, &CompanyQuery::new(2));
        let later_page = run_query(&collection, &CompanyQuery::new(2).with_page(2));
        let tiny_pages = run_query(&collection, &CompanyQuery::new(1).with_page(3));

        assert_eq!(all.total, 4);
        assert_eq!(later_page.total, 4);
        assert_eq!(tiny_pages.total, 4);
    }

    #[test]
    fn page_count_is_ceiling_of_total() {
        let collection = fixture();

        assert_eq!(run_query(&collection, &CompanyQuery::new(2)).total_pages, 2);
        assert_eq!(run_query(&collection, &CompanyQuery::new(3)).total_pages, 2);
        assert_eq!(run_query(&collection, &CompanyQuery::new(4)).total_pages, 1);
        assert_eq!(run_query(&collection, &CompanyQuery::new(9)).total_pages, 1);
    }

    #[test]
    fn page_beyond_range_clamps_to_last() {
        let collection = fixture();
        let query = CompanyQuery::new(3).with_page(99);

        let page = run_query(&collection, &query);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);

        let last = run_query(&collection, &CompanyQuery::new(3).with_page(2));
        assert_eq!(ids(&page), ids(&last));
    }

    #[test]
    fn non_positive_page_behaves_as_first() {
        let collection = fixture();

        // `with_page` clamps at the boundary, matching parse_positive for
        // raw string input.
        let first = run_query(&collection, &CompanyQuery::new(3).with_page(1));
        let clamped = run_query(&collection, &CompanyQuery::new(3).with_page(0));
        assert_eq!(ids(&first), ids(&clamped));
    }

    #[test]
    fn equal_keys_keep_collection_order_in_both_directions() {
        let collection = fixture();

        // c-2 and c-3 share founded == 2021.
        let asc = run_query(
            &collection,
            &CompanyQuery::new(9).with_sort(SortBy::Founded, SortDir::Asc),
        );
        assert_eq!(ids(&asc), vec!["c-1", "c-2", "c-3", "c-4"]);

        let desc = run_query(
            &collection,
            &CompanyQuery::new(9).with_sort(SortBy::Founded, SortDir::Desc),
        );
        // Ties (c-2, c-3) stay in collection order even when descending.
        assert_eq!(ids(&desc), vec!["c-4", "c-2", "c-3", "c-1"]);
    }

    #[test]
    fn sentinel_forms_are_equivalent() {
        let collection = fixture();

        let absent = run_query(&collection, &CompanyQuery::new(9));
        let empty = run_query(&collection, &CompanyQuery::new(9).with_sector(""));
        let all = run_query(&collection, &CompanyQuery::new(9).with_sector("all"));

        assert_eq!(absent, empty);
        assert_eq!(absent, all);
    }

    #[test]
    fn employees_sort_uses_numeric_lower_bound() {
        let collection = fixture();
        let query = CompanyQuery::new(9).with_sort(SortBy::Employees, SortDir::Asc);

        let page = run_query(&collection, &query);
        let bands: Vec<&str> = page.data.iter().map(|c| c.employees.as_str()).collect();
        // Lexicographic order would put "101-500" before "11-50".
        assert_eq!(bands, vec!["1-10", "1-10", "11-50", "101-500"]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let collection = fixture();
        let page = run_query(&collection, &CompanyQuery::new(9));

        // "arbor health" sorts before "Ledgerline" despite the lowercase a.
        assert_eq!(ids(&page), vec!["c-4", "c-1", "c-3", "c-2"]);
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let collection = fixture();
        let query = CompanyQuery::new(9).with_search("ai");

        let page = run_query(&collection, &query);
        // "AI-powered" in c-1's description, "ai" tag on c-3.
        assert_eq!(ids(&page), vec!["c-1", "c-3"]);
    }

    #[test]
    fn search_for_all_is_a_literal_substring() {
        // "all" is a filter sentinel on the discrete dimensions, never on
        // the free-text search.
        let collection = vec![company("c-1", "Allied Metals"), company("c-2", "Verdant")];

        let page = run_query(&collection, &CompanyQuery::new(9).with_search("all"));
        assert_eq!(page.total, 1);
        assert_eq!(ids(&page), vec!["c-1"]);
    }

    #[test]
    fn search_matches_tags() {
        let collection = fixture();
        let query = CompanyQuery::new(9).with_search("carbon");

        let page = run_query(&collection, &query);
        assert_eq!(ids(&page), vec!["c-2"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let collection = fixture();
        let query = CompanyQuery::new(9)
            .with_stage("Seed")
            .with_location("Berlin");

        let page = run_query(&collection, &query);
        assert_eq!(page.total, 2);
        assert_eq!(ids(&page), vec!["c-3", "c-2"]);
    }

    #[test]
    fn zero_matches_yield_single_empty_page() {
        let collection = fixture();
        let query = CompanyQuery::new(9).with_search("quantum blockchain");

        let page = run_query(&collection, &query);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn ten_companies_page_size_nine_second_page() {
        let collection: Vec<Company> = (0..10)
            .map(|n| company(&format!("c-{n}"), &format!("Company {n:02}")))
            .collect();

        let page = run_query(&collection, &CompanyQuery::new(9).with_page(2));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
    }
}
