//! Front-page categories (tabs)

use std::fmt;

use crate::VtvError;

/// News categories shown as tabs on the front page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Home page, latest Vietnam news
    Home,
    /// Thời Sự - current affairs and politics
    ThoiSu,
    /// Kinh Tế - economy
    KinhTe,
    /// Thế Giới - international
    TheGioi,
    /// Thể Thao - sports
    TheThao,
    /// Giải Trí - entertainment
    GiaiTri,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Home,
        Category::ThoiSu,
        Category::KinhTe,
        Category::TheGioi,
        Category::TheThao,
        Category::GiaiTri,
    ];

    /// Tab identifier used in URLs and on the page model
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Home => "vietnam",
            Category::ThoiSu => "thoisu",
            Category::KinhTe => "kinhte",
            Category::TheGioi => "thegioi",
            Category::TheThao => "thethao",
            Category::GiaiTri => "giaitri",
        }
    }

    /// Query used when the tab is opened without a search
    pub fn default_query(&self) -> &'static str {
        match self {
            Category::Home => "vietnam news latest",
            Category::ThoiSu => "vietnam politics",
            Category::KinhTe => "vietnam economy",
            Category::TheGioi => "vietnam international",
            Category::TheThao => "vietnam sports",
            Category::GiaiTri => "vietnam entertainment",
        }
    }

    /// Get the full display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Home => "Trang Chủ",
            Category::ThoiSu => "Thời Sự",
            Category::KinhTe => "Kinh Tế",
            Category::TheGioi => "Thế Giới",
            Category::TheThao => "Thể Thao",
            Category::GiaiTri => "Giải Trí",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Category {
    type Err = VtvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vietnam" | "home" | "" => Ok(Category::Home),
            "thoisu" => Ok(Category::ThoiSu),
            "kinhte" => Ok(Category::KinhTe),
            "thegioi" => Ok(Category::TheGioi),
            "thethao" => Ok(Category::TheThao),
            "giaitri" => Ok(Category::GiaiTri),
            _ => Err(VtvError::not_found(format!("Unknown category: {}", s))),
        }
    }
}
