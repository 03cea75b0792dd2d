use super::*;
use crate::records::{Photo, Vendor};

fn vendor(name: &str, category: &str, description: &str, specialties: &[&str]) -> Vendor {
    Vendor {
        name: name.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        specialties: specialties.iter().map(|s| (*s).to_owned()).collect(),
        contact_email: format!("hello@{}.example", name.to_lowercase().replace(' ', "")),
        contact_phone: "(555) 000-0000".to_owned(),
        rating: 4.8,
        review_count: 100,
    }
}

fn directory() -> Vec<Vendor> {
    vec![
        vendor(
            "Eternal Moments Photography",
            "Photography",
            "Award-winning wedding photography capturing authentic emotions and cultural traditions",
            &["Indian", "African", "Chinese"],
        ),
        vendor(
            "Spice & Stories Catering",
            "Catering",
            "Authentic cuisine from around the world, specializing in cultural wedding menus",
            &["Indian", "Muslim", "Latino"],
        ),
        vendor(
            "Harmony Wedding Musicians",
            "Entertainment",
            "Live music and DJs experienced in traditional and modern wedding entertainment",
            &["Jewish", "African", "Korean"],
        ),
        vendor(
            "Garden Dreams Florals",
            "Florists",
            "Custom floral designs incorporating cultural flowers and meaningful botanicals",
            &["Chinese", "Indian", "Latino"],
        ),
        vendor(
            "Glow Beauty Studio",
            "Beauty",
            "Bridal makeup and hair specialists familiar with diverse beauty traditions",
            &["African", "Indian", "Muslim"],
        ),
        vendor(
            "Elite Wedding Venues",
            "Venues",
            "Stunning venues perfect for ceremonies of all sizes and cultural requirements",
            &["Jewish", "Chinese", "Korean"],
        ),
    ]
}

fn photo(id: u32, category: &str, couple: &str) -> Photo {
    Photo {
        id,
        category: category.to_owned(),
        alt: format!("{category} wedding"),
        couple: couple.to_owned(),
        year: "2024".to_owned(),
        image: format!("{couple}.jpg"),
    }
}

fn album() -> Vec<Photo> {
    vec![
        photo(1, "Indian", "Priya & Raj"),
        photo(2, "African", "Zara & Marcus"),
        photo(3, "Western", "Emma & James"),
        photo(4, "Chinese", "Li & Chen"),
        photo(5, "Jewish", "Sarah & David"),
        photo(6, "Muslim", "Aisha & Omar"),
        photo(7, "Latino", "Sofia & Diego"),
        photo(8, "Indian", "Kavya & Arjun"),
    ]
}

fn names<'a>(visible: &[&'a Vendor]) -> Vec<&'a str> {
    visible.iter().map(|v| v.name.as_str()).collect()
}

// =============================================================
// Criterion
// =============================================================

#[test]
fn all_sentinel_criteria_are_inactive() {
    assert!(Criterion::Category(ALL.to_owned()).is_inactive());
    assert!(Criterion::Culture(ALL.to_owned()).is_inactive());
    assert!(Criterion::Search(String::new()).is_inactive());
}

#[test]
fn non_sentinel_criteria_are_active() {
    assert!(!Criterion::Category("Photography".to_owned()).is_inactive());
    assert!(!Criterion::Culture("Indian".to_owned()).is_inactive());
    assert!(!Criterion::Search("garden".to_owned()).is_inactive());
}

#[test]
fn category_criterion_is_an_exact_match() {
    let v = vendor("A", "Photography", "", &[]);
    assert!(Criterion::Category("Photography".to_owned()).matches(&v));
    assert!(!Criterion::Category("photography".to_owned()).matches(&v));
    assert!(!Criterion::Category("Photo".to_owned()).matches(&v));
}

#[test]
fn culture_criterion_is_set_membership() {
    let v = vendor("A", "Catering", "", &["Indian", "Muslim"]);
    assert!(Criterion::Culture("Muslim".to_owned()).matches(&v));
    assert!(!Criterion::Culture("Korean".to_owned()).matches(&v));
}

#[test]
fn search_criterion_is_case_insensitive_substring() {
    let v = vendor("Garden Dreams Florals", "Florists", "Custom floral designs", &[]);
    assert!(Criterion::Search("GARDEN".to_owned()).matches(&v));
    assert!(Criterion::Search("floral designs".to_owned()).matches(&v));
    assert!(!Criterion::Search("catering".to_owned()).matches(&v));
}

#[test]
fn search_criterion_scans_every_haystack() {
    let v = vendor("Glow Beauty Studio", "Beauty", "Bridal makeup and hair specialists", &[]);
    // Name hit and description hit both count.
    assert!(Criterion::Search("glow".to_owned()).matches(&v));
    assert!(Criterion::Search("makeup".to_owned()).matches(&v));
}

#[test]
fn search_on_a_catalog_without_haystacks_matches_nothing() {
    let p = photo(1, "Indian", "Priya & Raj");
    assert!(!Criterion::Search("priya".to_owned()).matches(&p));
    // The inactive form still passes.
    assert!(Criterion::Search(String::new()).matches(&p));
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn default_state_is_the_identity_filter() {
    let state = FilterState::default();
    assert_eq!(state.category, ALL);
    assert_eq!(state.culture, ALL);
    assert_eq!(state.search, "");
    assert!(state.is_default());
}

#[test]
fn clear_resets_every_dimension() {
    let mut state = FilterState {
        category: "Venues".to_owned(),
        culture: "Korean".to_owned(),
        search: "elite".to_owned(),
    };
    assert!(!state.is_default());
    state.clear();
    assert!(state.is_default());
}

#[test]
fn criteria_covers_all_three_dimensions() {
    let state = FilterState {
        category: "Catering".to_owned(),
        culture: "Latino".to_owned(),
        search: "spice".to_owned(),
    };
    let criteria = state.criteria();
    assert_eq!(criteria.len(), 3);
    assert!(criteria.contains(&Criterion::Category("Catering".to_owned())));
    assert!(criteria.contains(&Criterion::Culture("Latino".to_owned())));
    assert!(criteria.contains(&Criterion::Search("spice".to_owned())));
}

// =============================================================
// apply_filters: identity and ordering
// =============================================================

#[test]
fn identity_filter_returns_every_record_in_order() {
    let vendors = directory();
    let visible = apply_filters(&vendors, &FilterState::default());
    assert_eq!(visible.len(), vendors.len());
    for (got, want) in visible.iter().zip(&vendors) {
        assert_eq!(*got, want);
    }
}

#[test]
fn filtering_preserves_relative_order() {
    let vendors = directory();
    let state = FilterState {
        culture: "Indian".to_owned(),
        ..FilterState::default()
    };
    let visible = apply_filters(&vendors, &state);
    assert_eq!(
        names(&visible),
        vec![
            "Eternal Moments Photography",
            "Spice & Stories Catering",
            "Garden Dreams Florals",
            "Glow Beauty Studio",
        ]
    );
}

#[test]
fn filtering_is_idempotent() {
    let vendors = directory();
    let state = FilterState {
        culture: "Chinese".to_owned(),
        search: "cultural".to_owned(),
        ..FilterState::default()
    };
    let once: Vec<Vendor> = apply_filters(&vendors, &state).into_iter().cloned().collect();
    let twice: Vec<Vendor> = apply_filters(&once, &state).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

// =============================================================
// apply_filters: single dimensions
// =============================================================

#[test]
fn category_narrows_to_exact_matches() {
    let vendors = directory();
    let state = FilterState {
        category: "Photography".to_owned(),
        ..FilterState::default()
    };
    assert_eq!(names(&apply_filters(&vendors, &state)), vec!["Eternal Moments Photography"]);
}

#[test]
fn culture_keeps_vendors_listing_the_tag() {
    let vendors = directory();
    let state = FilterState {
        culture: "Korean".to_owned(),
        ..FilterState::default()
    };
    assert_eq!(
        names(&apply_filters(&vendors, &state)),
        vec!["Harmony Wedding Musicians", "Elite Wedding Venues"]
    );
}

#[test]
fn search_garden_finds_garden_dreams_florals() {
    let vendors = directory();
    for term in ["garden", "GARDEN", "Garden Dreams"] {
        let state = FilterState {
            search: term.to_owned(),
            ..FilterState::default()
        };
        assert_eq!(
            names(&apply_filters(&vendors, &state)),
            vec!["Garden Dreams Florals"],
            "term {term:?}"
        );
    }
}

#[test]
fn search_matches_descriptions_too() {
    let vendors = directory();
    let state = FilterState {
        search: "authentic".to_owned(),
        ..FilterState::default()
    };
    assert_eq!(
        names(&apply_filters(&vendors, &state)),
        vec!["Eternal Moments Photography", "Spice & Stories Catering"]
    );
}

// =============================================================
// apply_filters: conjunction and empty results
// =============================================================

#[test]
fn active_filters_compose_conjunctively() {
    let vendors = directory();
    let state = FilterState {
        category: "Photography".to_owned(),
        culture: "Indian".to_owned(),
        search: String::new(),
    };
    assert_eq!(names(&apply_filters(&vendors, &state)), vec!["Eternal Moments Photography"]);

    // Same category, a culture the photographer does not list.
    let state = FilterState {
        category: "Photography".to_owned(),
        culture: "Jewish".to_owned(),
        search: String::new(),
    };
    assert!(apply_filters(&vendors, &state).is_empty());
}

#[test]
fn unmatched_category_yields_an_empty_set() {
    let vendors = directory();
    // A chip with no vendors behind it.
    let state = FilterState {
        category: "Transportation".to_owned(),
        ..FilterState::default()
    };
    assert!(apply_filters(&vendors, &state).is_empty());
}

#[test]
fn clearing_after_an_empty_result_restores_everything() {
    let vendors = directory();
    let mut state = FilterState {
        category: "Transportation".to_owned(),
        culture: "Korean".to_owned(),
        search: "nothing matches this".to_owned(),
    };
    assert!(apply_filters(&vendors, &state).is_empty());
    state.clear();
    assert_eq!(apply_filters(&vendors, &state).len(), vendors.len());
}

// =============================================================
// apply_filters: photos
// =============================================================

#[test]
fn photo_category_filter_keeps_order_of_matches() {
    let photos = album();
    let state = FilterState {
        category: "Indian".to_owned(),
        ..FilterState::default()
    };
    let visible = apply_filters(&photos, &state);
    let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 8]);
}

#[test]
fn photo_catalog_ignores_culture_dimension_entirely() {
    let photos = album();
    // Photos carry no culture tags, so an active culture chip empties the set.
    let state = FilterState {
        culture: "Indian".to_owned(),
        ..FilterState::default()
    };
    assert!(apply_filters(&photos, &state).is_empty());
}

// =============================================================
// chip_options
// =============================================================

#[test]
fn chip_options_prepends_the_sentinel() {
    let options = vec!["Photography".to_owned(), "Catering".to_owned()];
    assert_eq!(chip_options(&options), vec!["All", "Photography", "Catering"]);
}

#[test]
fn chip_options_on_empty_list_is_just_the_sentinel() {
    assert_eq!(chip_options(&[]), vec![ALL.to_owned()]);
}
