//! Record types for the site's browsable catalogs.
//!
//! These are plain serde structs shared verbatim between the content files
//! (YAML), the API (JSON), and the rendered pages. All mutation happens at
//! content-authoring time; lists keep their content-file order end to end.

use serde::{Deserialize, Serialize};

use crate::filter::Record;

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

/// A single gallery photograph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Stable identifier, unique within the photo catalog.
    pub id: u32,
    /// Cultural tradition category, e.g. `"Indian"`.
    pub category: String,
    /// Alt text describing the scene.
    pub alt: String,
    /// Couple names as displayed on the tile, e.g. `"Priya & Raj"`.
    pub couple: String,
    /// Wedding year as displayed. Kept as text, it is display-only.
    pub year: String,
    /// Image file name under the assets base path.
    pub image: String,
}

/// A vendor in the preferred-partner directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Business name, unique within the vendor catalog.
    pub name: String,
    /// Service category, e.g. `"Photography"`.
    pub category: String,
    /// Short pitch shown on the card.
    pub description: String,
    /// Cultural traditions the vendor specializes in.
    pub specialties: Vec<String>,
    /// Contact email shown on the card.
    pub contact_email: String,
    /// Contact phone shown on the card.
    pub contact_phone: String,
    /// Average review rating in `[0.0, 5.0]`.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
}

/// A blog article teaser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Publication date as displayed, e.g. `"March 15, 2024"`.
    pub date: String,
    pub category: String,
    /// Estimated reading time label, e.g. `"8 min read"`.
    pub read_time: String,
    /// Cover image file name under the assets base path.
    pub image: String,
    /// Shown in the hero slot above the grid. At most one post should set
    /// this; the first wins.
    #[serde(default)]
    pub featured: bool,
}

/// A planning package on the services page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicePackage {
    pub title: String,
    /// Price label, e.g. `"Starting at $5,000"`.
    pub price: String,
    pub description: String,
    /// Bullet list of what the package includes.
    pub features: Vec<String>,
    pub image: String,
}

/// A portfolio case study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    /// Short fact badges, e.g. `"300 guests"`.
    pub details: Vec<String>,
    /// Size of the full gallery behind the teaser.
    pub photo_count: u32,
    pub image: String,
}

/// A client quote for the home-page carousel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Couple names as signed, e.g. `"Priya & James Chen"`.
    pub couple: String,
    pub quote: String,
    /// Star rating out of five.
    pub rating: u8,
}

/// One question/answer pair for an accordion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A headline number on the home page, e.g. `"500+"` / `"Weddings Planned"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub number: String,
    pub label: String,
}

/// A cultural tradition with its blurb, for the services page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CulturalSpecialty {
    pub name: String,
    pub description: String,
}

/// A design direction on the portfolio page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignStyle {
    pub title: String,
    pub description: String,
}

/// One step of the planning-process timeline on the portfolio page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

impl Record for Photo {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Record for Vendor {
    fn category(&self) -> &str {
        &self.category
    }

    fn culture_tags(&self) -> &[String] {
        &self.specialties
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl Record for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }
}
