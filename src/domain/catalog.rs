//! Course catalog records and filtering.
//!
//! Filtering is the intersection of a category selection and a
//! case-insensitive text search over title and description. "All Courses"
//! with an empty query returns the full list.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub duration: String,
    pub students: u32,
    pub rating: f32,
    pub price: String,
    pub description: String,
}

/// Category side of the course filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// "All Courses" - no category restriction.
    All,
    /// Restrict to one category by exact name.
    Category(String),
}

/// Combined course filter: category selection AND text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl CourseFilter {
    /// The unfiltered view.
    pub fn all() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
        }
    }

    /// Restricts to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Category(category.into());
        self
    }

    /// Sets the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns true when the course passes both predicates.
    pub fn matches(&self, course: &Course) -> bool {
        let matches_category = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => course.category == *name,
        };

        let needle = self.query.to_lowercase();
        let matches_search = needle.is_empty()
            || course.title.to_lowercase().contains(&needle)
            || course.description.to_lowercase().contains(&needle);

        matches_category && matches_search
    }

    /// Applies the filter to a course list.
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

impl Default for CourseFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Distinct categories present in a course list, preserving first-seen order.
pub fn categories(courses: &[Course]) -> Vec<&str> {
    let mut seen = Vec::new();
    for course in courses {
        if !seen.contains(&course.category.as_str()) {
            seen.push(course.category.as_str());
        }
    }
    seen
}

/// The bundled sample catalog.
pub fn sample_courses() -> &'static [Course] {
    static COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
        vec![
            Course {
                id: 1,
                title: "Introduction to Web Development".to_string(),
                instructor: "Dr. Sarah Chen".to_string(),
                category: "Computer Science".to_string(),
                duration: "8 weeks".to_string(),
                students: 1250,
                rating: 4.7,
                price: "Free".to_string(),
                description: "Learn the fundamentals of HTML, CSS, and JavaScript to build modern web applications.".to_string(),
            },
            Course {
                id: 2,
                title: "Business Strategy and Planning".to_string(),
                instructor: "Prof. Michael Johnson".to_string(),
                category: "Business & Management".to_string(),
                duration: "6 weeks".to_string(),
                students: 890,
                rating: 4.5,
                price: "$49".to_string(),
                description: "Develop strategic thinking skills and learn to create effective business plans.".to_string(),
            },
            Course {
                id: 3,
                title: "Digital Marketing Fundamentals".to_string(),
                instructor: "Dr. Emily Rodriguez".to_string(),
                category: "Business & Management".to_string(),
                duration: "4 weeks".to_string(),
                students: 2100,
                rating: 4.8,
                price: "Free".to_string(),
                description: "Master SEO, social media marketing, and content creation strategies.".to_string(),
            },
            Course {
                id: 4,
                title: "Data Science with Python".to_string(),
                instructor: "Dr. James Wilson".to_string(),
                category: "Computer Science".to_string(),
                duration: "10 weeks".to_string(),
                students: 1650,
                rating: 4.9,
                price: "$79".to_string(),
                description: "Learn data analysis, visualization, and machine learning using Python.".to_string(),
            },
            Course {
                id: 5,
                title: "Creative Writing Workshop".to_string(),
                instructor: "Prof. Lisa Anderson".to_string(),
                category: "Arts & Humanities".to_string(),
                duration: "5 weeks".to_string(),
                students: 650,
                rating: 4.6,
                price: "$39".to_string(),
                description: "Develop your writing skills through exercises and peer feedback.".to_string(),
            },
            Course {
                id: 6,
                title: "Introduction to Psychology".to_string(),
                instructor: "Dr. Robert Brown".to_string(),
                category: "Social Sciences".to_string(),
                duration: "12 weeks".to_string(),
                students: 3200,
                rating: 4.7,
                price: "Free".to_string(),
                description: "Explore the fundamentals of human behavior and mental processes.".to_string(),
            },
        ]
    });
    &COURSES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_returns_full_list() {
        let filtered = CourseFilter::all().apply(sample_courses());
        assert_eq!(filtered.len(), sample_courses().len());
    }

    #[test]
    fn category_and_search_intersect() {
        // The concrete scenario: Computer Science + "data" yields exactly
        // the Data Science course.
        let filter = CourseFilter::all()
            .with_category("Computer Science")
            .with_query("data");

        let filtered = filter.apply(sample_courses());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Data Science with Python");
    }

    #[test]
    fn search_is_case_insensitive_and_covers_description() {
        let filter = CourseFilter::all().with_query("SEO");
        let filtered = filter.apply(sample_courses());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Digital Marketing Fundamentals");
    }

    #[test]
    fn category_alone_narrows_the_list() {
        let filter = CourseFilter::all().with_category("Business & Management");
        assert_eq!(filter.apply(sample_courses()).len(), 2);
    }

    #[test]
    fn unmatched_search_yields_empty_list() {
        let filter = CourseFilter::all().with_query("quantum chromodynamics");
        assert!(filter.apply(sample_courses()).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let filter = CourseFilter::all().with_category("Culinary Arts");
        assert!(filter.apply(sample_courses()).is_empty());
    }

    #[test]
    fn categories_preserve_first_seen_order() {
        let cats = categories(sample_courses());
        assert_eq!(
            cats,
            vec![
                "Computer Science",
                "Business & Management",
                "Arts & Humanities",
                "Social Sciences",
            ]
        );
    }
}
