use super::*;

fn post(title: &str, category: &str, featured: bool) -> BlogPost {
    BlogPost {
        title: title.to_owned(),
        excerpt: format!("{title} excerpt about celebrations"),
        author: "Amira Chen".to_owned(),
        date: "March 15, 2024".to_owned(),
        category: category.to_owned(),
        read_time: "6 min read".to_owned(),
        image: "cover.jpg".to_owned(),
        featured,
    }
}

fn posts() -> Vec<BlogPost> {
    vec![
        post("Multi-Cultural Wedding Guide", "Cultural Traditions", true),
        post("Spring Color Palettes", "Design & Decor", false),
        post("Budgeting Without Stress", "Planning Tips", false),
        post("A Mumbai Celebration", "Cultural Traditions", false),
    ]
}

// =============================================================
// featured_post
// =============================================================

#[test]
fn featured_post_picks_flagged_entry() {
    let all = posts();
    let featured = featured_post(&all).unwrap();
    assert_eq!(featured.title, "Multi-Cultural Wedding Guide");
}

#[test]
fn featured_post_falls_back_to_first() {
    let mut all = posts();
    for p in &mut all {
        p.featured = false;
    }
    let featured = featured_post(&all).unwrap();
    assert_eq!(featured.title, "Multi-Cultural Wedding Guide");
}

#[test]
fn featured_post_empty_catalog_is_none() {
    assert!(featured_post(&[]).is_none());
}

// =============================================================
// grid_posts
// =============================================================

#[test]
fn grid_excludes_the_featured_post() {
    let all = posts();
    let grid = grid_posts(&all, &FilterState::default());
    assert_eq!(grid.len(), 3);
    assert!(grid.iter().all(|p| !p.featured));
}

#[test]
fn grid_filters_by_category() {
    let all = posts();
    let state = FilterState {
        category: "Cultural Traditions".to_owned(),
        ..FilterState::default()
    };
    let grid = grid_posts(&all, &state);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].title, "A Mumbai Celebration");
}

#[test]
fn grid_search_scans_titles_and_excerpts() {
    let all = posts();
    let state = FilterState {
        search: "budgeting".to_owned(),
        ..FilterState::default()
    };
    let grid = grid_posts(&all, &state);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].title, "Budgeting Without Stress");
}
