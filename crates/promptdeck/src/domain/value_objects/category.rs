//! Category - Fixed set of catalog filter buttons

use serde::{Deserialize, Serialize};

/// Category filter
///
/// `All` matches every prompt; every other variant matches prompts that
/// carry a tag equal to its label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Admin,
    Copywriting,
    Coding,
    Marketing,
    Research,
}

impl Category {
    /// All categories in button order
    pub const ALL_CATEGORIES: [Category; 6] = [
        Category::All,
        Category::Admin,
        Category::Copywriting,
        Category::Coding,
        Category::Marketing,
        Category::Research,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Admin => "admin",
            Category::Copywriting => "copywriting",
            Category::Coding => "coding",
            Category::Marketing => "marketing",
            Category::Research => "research",
        }
    }

    /// The tag a prompt must carry to match, `None` for `All`
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            other => Some(other.label()),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "admin" => Ok(Category::Admin),
            "copywriting" => Ok(Category::Copywriting),
            "coding" => Ok(Category::Coding),
            "marketing" => Ok(Category::Marketing),
            "research" => Ok(Category::Research),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
