//! Aggregate site content and its YAML loading.
//!
//! CONTENT PIPELINE: the `content/` directory holds one YAML file per
//! catalog plus `site.yaml` for business-level content. The server loads the
//! directory once at startup, validates it, and serves the whole aggregate
//! over `GET /api/content`; pages render exclusively from this structure, so
//! copy changes never touch Rust code.
//!
//! The chip lists in [`SiteInfo`] deliberately exclude the `"All"` sentinel.
//! That value belongs to the filter engine, and the UI prepends it when
//! rendering chips.

use serde::{Deserialize, Serialize};

use crate::filter::ALL;
use crate::inquiry::is_plausible_email;
use crate::records::{
    BlogPost, CulturalSpecialty, DesignStyle, Faq, Photo, ProcessStep, Project, ServicePackage,
    Statistic, Testimonial, Vendor,
};

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Error loading or validating a content directory.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A content file could not be read.
    #[cfg(feature = "fs")]
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A content file could not be parsed as the expected record shape.
    #[cfg(feature = "fs")]
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// The loaded content failed cross-record validation.
    #[error("content validation failed:\n{}", .issues.join("\n"))]
    Invalid { issues: Vec<String> },
}

/// Everything the site renders, one field per content file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub photos: Vec<Photo>,
    pub vendors: Vec<Vendor>,
    pub posts: Vec<BlogPost>,
    pub services: Vec<ServicePackage>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: FaqSections,
    pub site: SiteInfo,
}

/// FAQ lists keyed by the page that shows them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqSections {
    /// Long-form accordion on the services page.
    pub services: Vec<Faq>,
    /// Short "quick FAQ" sidebar on the contact page.
    pub contact: Vec<Faq>,
}

/// Business-level content: identity, contact details, and the fixed option
/// lists the pages render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Business name, e.g. `"Eternal Moments"`.
    pub name: String,
    /// Strapline under the name.
    pub tagline: String,
    /// Contact block shown in the footer and on the contact page.
    pub contact: ContactInfo,
    /// Headline statistics for the home page.
    pub statistics: Vec<Statistic>,
    /// Cultural traditions, with blurbs, for the services page.
    pub cultural_specialties: Vec<CulturalSpecialty>,
    /// Gallery category chips, without the sentinel.
    pub gallery_categories: Vec<String>,
    /// Vendor category chips, without the sentinel.
    pub vendor_categories: Vec<String>,
    /// Vendor culture chips, without the sentinel.
    pub cultures: Vec<String>,
    /// Blog category chips, without the sentinel.
    pub blog_categories: Vec<String>,
    /// Budget dropdown options on the contact form.
    pub budget_ranges: Vec<String>,
    /// Service checkbox labels on the contact form.
    pub service_options: Vec<String>,
    /// "How did you hear about us" options on the contact form.
    pub referral_sources: Vec<String>,
    /// Titles for the blog sidebar's popular list.
    pub popular_posts: Vec<String>,
    /// Design styles for the portfolio page.
    pub design_styles: Vec<DesignStyle>,
    /// Process timeline for the portfolio page.
    pub process_steps: Vec<ProcessStep>,
}

/// Ways to reach the business.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Office hours, one line per row.
    pub hours: Vec<String>,
    /// Instagram handle including the `@`.
    pub instagram: String,
}

impl SiteContent {
    /// Cross-record validation, returning every issue found rather than
    /// stopping at the first so a content author can fix a batch in one
    /// editing pass.
    #[must_use]
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (label, list) in [
            ("gallery_categories", &self.site.gallery_categories),
            ("vendor_categories", &self.site.vendor_categories),
            ("cultures", &self.site.cultures),
            ("blog_categories", &self.site.blog_categories),
        ] {
            if list.iter().any(|value| value == ALL) {
                issues.push(format!("site.{label} contains the reserved value {ALL:?}"));
            }
            if list.is_empty() {
                issues.push(format!("site.{label} is empty"));
            }
        }

        let mut seen_ids = std::collections::HashSet::new();
        for photo in &self.photos {
            if !seen_ids.insert(photo.id) {
                issues.push(format!("duplicate photo id {}", photo.id));
            }
            if !self.site.gallery_categories.contains(&photo.category) {
                issues.push(format!(
                    "photo {} has unknown category {:?}",
                    photo.id, photo.category
                ));
            }
        }

        let mut seen_names = std::collections::HashSet::new();
        for vendor in &self.vendors {
            if vendor.name.trim().is_empty() {
                issues.push("vendor with empty name".to_owned());
                continue;
            }
            if !seen_names.insert(vendor.name.as_str()) {
                issues.push(format!("duplicate vendor name {:?}", vendor.name));
            }
            if !(0.0..=5.0).contains(&vendor.rating) {
                issues.push(format!(
                    "vendor {:?} rating {} outside 0..=5",
                    vendor.name, vendor.rating
                ));
            }
            if !self.site.vendor_categories.contains(&vendor.category) {
                issues.push(format!(
                    "vendor {:?} has unknown category {:?}",
                    vendor.name, vendor.category
                ));
            }
            for tag in &vendor.specialties {
                if !self.site.cultures.contains(tag) {
                    issues.push(format!("vendor {:?} has unknown culture {tag:?}", vendor.name));
                }
            }
            if !is_plausible_email(&vendor.contact_email) {
                issues.push(format!(
                    "vendor {:?} has implausible contact email {:?}",
                    vendor.name, vendor.contact_email
                ));
            }
        }

        for post in &self.posts {
            if !self.site.blog_categories.contains(&post.category) {
                issues.push(format!(
                    "post {:?} has unknown category {:?}",
                    post.title, post.category
                ));
            }
        }

        if self.posts.iter().filter(|post| post.featured).count() > 1 {
            issues.push("more than one post is marked featured".to_owned());
        }

        issues
    }

    /// Validate, converting issues into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Invalid`] listing every issue found.
    pub fn validate(&self) -> Result<(), ContentError> {
        let issues = self.validation_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ContentError::Invalid { issues })
        }
    }
}

#[cfg(feature = "fs")]
impl SiteContent {
    /// Load every content file from `dir`.
    ///
    /// Validation is a separate step, see [`SiteContent::validate`]; startup
    /// code runs both, authoring tools may want the issues without failing.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Read`] when a file is missing or unreadable
    /// and [`ContentError::Parse`] when its YAML does not match the record
    /// shape.
    pub fn load_dir(dir: &std::path::Path) -> Result<Self, ContentError> {
        Ok(Self {
            photos: load_file(dir, "photos.yaml")?,
            vendors: load_file(dir, "vendors.yaml")?,
            posts: load_file(dir, "posts.yaml")?,
            services: load_file(dir, "services.yaml")?,
            projects: load_file(dir, "projects.yaml")?,
            testimonials: load_file(dir, "testimonials.yaml")?,
            faqs: load_file(dir, "faqs.yaml")?,
            site: load_file(dir, "site.yaml")?,
        })
    }
}

#[cfg(feature = "fs")]
fn load_file<T: serde::de::DeserializeOwned>(
    dir: &std::path::Path,
    name: &str,
) -> Result<T, ContentError> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|source| ContentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ContentError::Parse {
        path: path.display().to_string(),
        source,
    })
}
