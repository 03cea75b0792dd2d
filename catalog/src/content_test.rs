use super::*;

fn sample_photo(id: u32, category: &str) -> Photo {
    Photo {
        id,
        category: category.to_owned(),
        alt: "ceremony".to_owned(),
        couple: "A & B".to_owned(),
        year: "2024".to_owned(),
        image: "a-and-b.jpg".to_owned(),
    }
}

fn sample_vendor(name: &str) -> Vendor {
    Vendor {
        name: name.to_owned(),
        category: "Photography".to_owned(),
        description: "Cultural wedding photography".to_owned(),
        specialties: vec!["Indian".to_owned()],
        contact_email: "studio@example.com".to_owned(),
        contact_phone: "(555) 111-2222".to_owned(),
        rating: 4.9,
        review_count: 12,
    }
}

fn sample_content() -> SiteContent {
    SiteContent {
        photos: vec![sample_photo(1, "Indian"), sample_photo(2, "Jewish")],
        vendors: vec![sample_vendor("Lens & Light")],
        posts: vec![BlogPost {
            title: "Planning a fusion ceremony".to_owned(),
            excerpt: "Two traditions, one celebration.".to_owned(),
            author: "Sarah Chen".to_owned(),
            date: "March 15, 2024".to_owned(),
            category: "Cultural Traditions".to_owned(),
            read_time: "8 min read".to_owned(),
            image: "fusion.jpg".to_owned(),
            featured: true,
        }],
        services: Vec::new(),
        projects: Vec::new(),
        testimonials: Vec::new(),
        faqs: FaqSections::default(),
        site: SiteInfo {
            name: "Eternal Moments".to_owned(),
            gallery_categories: vec!["Indian".to_owned(), "Jewish".to_owned()],
            vendor_categories: vec!["Photography".to_owned(), "Catering".to_owned()],
            cultures: vec!["Indian".to_owned(), "Jewish".to_owned()],
            blog_categories: vec!["Cultural Traditions".to_owned()],
            ..SiteInfo::default()
        },
    }
}

// =============================================================
// validation: clean content
// =============================================================

#[test]
fn sample_content_validates_cleanly() {
    let content = sample_content();
    assert_eq!(content.validation_issues(), Vec::<String>::new());
    assert!(content.validate().is_ok());
}

// =============================================================
// validation: photo issues
// =============================================================

#[test]
fn duplicate_photo_ids_are_reported() {
    let mut content = sample_content();
    content.photos.push(sample_photo(1, "Indian"));
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("duplicate photo id 1")), "{issues:?}");
}

#[test]
fn unknown_photo_category_is_reported() {
    let mut content = sample_content();
    content.photos.push(sample_photo(3, "Martian"));
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("unknown category \"Martian\"")), "{issues:?}");
}

// =============================================================
// validation: vendor issues
// =============================================================

#[test]
fn duplicate_vendor_names_are_reported() {
    let mut content = sample_content();
    content.vendors.push(sample_vendor("Lens & Light"));
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("duplicate vendor name")), "{issues:?}");
}

#[test]
fn out_of_range_rating_is_reported() {
    let mut content = sample_content();
    content.vendors[0].rating = 5.4;
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("outside 0..=5")), "{issues:?}");
}

#[test]
fn unknown_vendor_culture_is_reported() {
    let mut content = sample_content();
    content.vendors[0].specialties.push("Atlantean".to_owned());
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("unknown culture \"Atlantean\"")), "{issues:?}");
}

#[test]
fn implausible_vendor_email_is_reported() {
    let mut content = sample_content();
    content.vendors[0].contact_email = "not-an-email".to_owned();
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("implausible contact email")), "{issues:?}");
}

// =============================================================
// validation: site issues
// =============================================================

#[test]
fn reserved_sentinel_in_a_chip_list_is_reported() {
    let mut content = sample_content();
    content.site.cultures.insert(0, "All".to_owned());
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("reserved value \"All\"")), "{issues:?}");
}

#[test]
fn empty_chip_list_is_reported() {
    let mut content = sample_content();
    content.site.blog_categories.clear();
    // The post's category also becomes unknown; both issues surface.
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("site.blog_categories is empty")), "{issues:?}");
    assert!(issues.len() >= 2, "{issues:?}");
}

#[test]
fn second_featured_post_is_reported() {
    let mut content = sample_content();
    let mut second = content.posts[0].clone();
    second.title = "Another headline".to_owned();
    content.posts.push(second);
    let issues = content.validation_issues();
    assert!(issues.iter().any(|i| i.contains("more than one post is marked featured")), "{issues:?}");
}

#[test]
fn validate_collects_every_issue_into_the_error() {
    let mut content = sample_content();
    content.photos.push(sample_photo(1, "Martian"));
    content.vendors[0].rating = -0.1;
    let Err(ContentError::Invalid { issues }) = content.validate() else {
        panic!("expected validation to fail");
    };
    assert!(issues.len() >= 3, "{issues:?}");
}

// =============================================================
// YAML shape
// =============================================================

#[test]
fn vendors_yaml_parses_into_records() {
    let yaml = r#"
- name: Garden Dreams Florals
  category: Florists
  description: Custom floral designs incorporating cultural flowers and meaningful botanicals
  specialties: [Chinese, Indian, Latino]
  contact_email: orders@gardendreams.com
  contact_phone: "(555) 456-7890"
  rating: 4.7
  review_count: 203
"#;
    let vendors: Vec<Vendor> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].name, "Garden Dreams Florals");
    assert_eq!(vendors[0].specialties, vec!["Chinese", "Indian", "Latino"]);
    assert_eq!(vendors[0].review_count, 203);
}

#[test]
fn faqs_yaml_parses_into_sections() {
    let yaml = r#"
services:
  - question: How far in advance should we book?
    answer: Twelve to eighteen months for full planning.
contact:
  - question: Do you offer payment plans?
    answer: Yes, schedules are flexible.
"#;
    let faqs: FaqSections = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(faqs.services.len(), 1);
    assert_eq!(faqs.contact.len(), 1);
    assert_eq!(faqs.contact[0].question, "Do you offer payment plans?");
}

#[test]
fn site_yaml_parses_with_nested_contact_block() {
    let yaml = r#"
name: Eternal Moments
tagline: Luxury Wedding Planning
contact:
  email: hello@eternalmoments.com
  phone: "(555) 123-4567"
  address: 123 Wedding Avenue, Dreams City, DC 12345
  hours:
    - "Mon-Fri: 9:00 AM - 6:00 PM"
  instagram: "@eternalmoments"
statistics:
  - number: "500+"
    label: Weddings Planned
cultural_specialties: []
gallery_categories: [Indian]
vendor_categories: [Photography]
cultures: [Indian]
blog_categories: [Planning Tips]
budget_ranges: ["Under $10,000"]
service_options: [Full Wedding Planning]
referral_sources: [Instagram]
popular_posts: []
design_styles: []
process_steps: []
"#;
    let site: SiteInfo = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(site.name, "Eternal Moments");
    assert_eq!(site.contact.email, "hello@eternalmoments.com");
    assert_eq!(site.statistics[0].number, "500+");
}
