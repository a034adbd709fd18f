use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Campaign category. Stored on the ledger as a single byte index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Technology = 0,
    Art = 1,
    Music = 2,
    Film = 3,
    Games = 4,
    Education = 5,
    Social = 6,
    Other = 7,
}

impl Category {
    /// Every category in index order.
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Art,
        Category::Music,
        Category::Film,
        Category::Games,
        Category::Education,
        Category::Social,
        Category::Other,
    ];

    /// Look up a category by its stored byte. Returns `None` past index 7.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The byte stored on the ledger.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Film => "Film",
            Category::Games => "Games",
            Category::Education => "Education",
            Category::Social => "Social",
            Category::Other => "Other",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = TypeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(TypeError::UnknownCategory(index))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypeError::UnknownCategoryName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_ledger_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index() as usize, i);
            assert_eq!(Category::from_index(i as u8), Some(*category));
        }
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert_eq!(Category::from_index(8), None);
        assert_eq!(Category::try_from(255), Err(TypeError::UnknownCategory(255)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("education".parse::<Category>().unwrap(), Category::Education);
        assert_eq!(" FILM ".parse::<Category>().unwrap(), Category::Film);
        assert!("sports".parse::<Category>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Category::Technology.to_string(), "Technology");
        assert_eq!(Category::Other.to_string(), "Other");
    }
}
