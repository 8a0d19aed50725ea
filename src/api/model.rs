use serde::{Deserialize, Serialize};

pub type ArticleId = i64;

/// A single list item. Identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
}

impl Article {
    pub fn new(id: ArticleId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

const FIXTURE: [(ArticleId, &str); 10] = [
    (1, "Getting Started with Angular: A Beginner's Guide"),
    (2, "Angular Components: Building Blocks of Web Apps"),
    (3, "Angular Services and Dependency Injection Explained"),
    (4, "Routing in Angular: Navigating Through Your App"),
    (5, "Angular Directives: Enhancing HTML with Power"),
    (6, "Angular Forms: From Basics to Advanced Techniques"),
    (7, "Testing Angular Applications: Best Practices and Tools"),
    (8, "State Management in Angular: A Comprehensive Guide"),
    (9, "Angular and RESTful APIs: Making HTTP Requests"),
    (10, "Angular Best Practices: Writing Clean and Maintainable Code"),
];

/// The ten articles served when no fixture is configured.
pub fn default_fixture() -> Vec<Article> {
    FIXTURE
        .iter()
        .map(|(id, title)| Article::new(*id, *title))
        .collect()
}
