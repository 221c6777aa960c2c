//! Asset categories handled by the installer
//!
//! The category set is fixed at build time: each category maps one source
//! subdirectory to the subdirectory of the same name in the aikit home.

use std::fmt;

/// One of the four asset kinds aikit installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Agents,
    Commands,
    Rules,
    Skills,
}

impl Category {
    /// All categories, in install order
    pub const ALL: [Category; 4] = [
        Category::Agents,
        Category::Commands,
        Category::Rules,
        Category::Skills,
    ];

    /// Directory name used on both the source and destination side
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Agents => "agents",
            Category::Commands => "commands",
            Category::Rules => "rules",
            Category::Skills => "skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
