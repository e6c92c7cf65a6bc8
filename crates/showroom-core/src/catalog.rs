use crate::error::ShowroomError;
use crate::scene::MaterialId;
use crate::state::Selection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoveringKind {
    Vinyl,
    Flock,
    Paper,
}

/// One product the panel offers. `id` doubles as the material identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub collection: &'static str,
    pub kind: CoveringKind,
    /// Price per roll; some listings are not priced yet.
    pub price: Option<f64>,
    pub link: &'static str,
}

impl CatalogEntry {
    pub fn selection(&self) -> Result<Selection, ShowroomError> {
        let price = self
            .price
            .ok_or_else(|| ShowroomError::UnpricedOption(self.id.to_string()))?;
        Ok(Selection {
            option: MaterialId::from(self.id),
            price,
        })
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "ceiling_1",
        collection: "Tradizione Italiana",
        kind: CoveringKind::Vinyl,
        price: Some(11.0),
        link: "https://www.wallcover.com/953723-memory-2-as-creation-non-woven-wallpaper.html",
    },
    CatalogEntry {
        id: "ceiling_2",
        collection: "Satin Flowers",
        kind: CoveringKind::Vinyl,
        price: Some(9.0),
        link: "https://www.wallcover.com/384831-wallpaper-jungle-monkey-monstera-leaves-tendrils-gray-white.html",
    },
    CatalogEntry {
        id: "wallpaper_1",
        collection: "Tradizione Italiana",
        kind: CoveringKind::Vinyl,
        price: Some(11.0),
        link: "https://www.wallcover.com/953723-memory-2-as-creation-non-woven-wallpaper.html",
    },
    CatalogEntry {
        id: "wallpaper_2",
        collection: "Satin Flowers",
        kind: CoveringKind::Vinyl,
        price: Some(9.0),
        link: "https://www.wallcover.com/384831-wallpaper-jungle-monkey-monstera-leaves-tendrils-gray-white.html",
    },
    CatalogEntry {
        id: "wallpaper_3",
        collection: "Elite",
        kind: CoveringKind::Flock,
        price: Some(17.0),
        link: "https://www.wallcover.com/32615-city-glam-marburg-wallpaper.html",
    },
    CatalogEntry {
        id: "wallpaper_4",
        collection: "Splendida",
        kind: CoveringKind::Paper,
        price: Some(14.0),
        link: "https://www.wallcover.com/17140-van-gogh-bn-wallcoverings-non-woven-wallpaper.html",
    },
    CatalogEntry {
        id: "wallpaper_5",
        collection: "Metropolis",
        kind: CoveringKind::Paper,
        price: None,
        link: "https://www.wallcover.com/384811-wallpaper-flowers-birds-blossoms-red-yellow-gray.html",
    },
    CatalogEntry {
        id: "wallpaper_6",
        collection: "Villa Dorata",
        kind: CoveringKind::Vinyl,
        price: Some(12.0),
        link: "https://www.wallcover.com/384821-wallpaper-jungle-monstera-leaves-tendrils-green-white.html",
    },
    CatalogEntry {
        id: "wallpaper_7",
        collection: "Unica",
        kind: CoveringKind::Vinyl,
        price: Some(10.0),
        link: "https://www.wallcover.com/935834-versace-home-as-creation-satin-wallpaper.html",
    },
    CatalogEntry {
        id: "wallpaper_8",
        collection: "Nova",
        kind: CoveringKind::Paper,
        price: Some(15.0),
        link: "https://www.wallcover.com/53126-la-veneziana-2-marburg-non-woven-wallpaper.html",
    },
];

pub fn find_entry(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}
