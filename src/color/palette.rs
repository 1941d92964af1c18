//! Static palette tables and palette lookup

use crate::color::rgb::Rgb;
use crate::io::error::{PatternError, Result};
use crate::random::source::RandomSource;
use std::sync::LazyLock;

/// A named, ordered list of colors used as a sampling pool
///
/// Colors are kept as text and parsed at generation time, so a caller-supplied
/// palette with bad entries surfaces as a generation failure rather than a
/// construction error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette from a name and its color strings
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        colors: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Palette name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw color strings in palette order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Parse every color in the palette
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or any entry is not a hex color
    pub fn parse_colors(&self) -> Result<Vec<Rgb>> {
        if self.colors.is_empty() {
            return Err(PatternError::EmptyPalette {
                name: self.name.clone(),
            });
        }
        self.colors.iter().map(|c| Rgb::parse(c)).collect()
    }
}

/// Ordered set of palettes with lookup by name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteTable {
    palettes: Vec<Palette>,
}

static BUILTIN_TABLE: LazyLock<PaletteTable> = LazyLock::new(|| {
    PaletteTable::new(
        BUILTIN_PALETTES
            .iter()
            .map(|(name, colors)| Palette::new(*name, colors.iter().copied()))
            .collect(),
    )
});

impl PaletteTable {
    /// Create a table from palettes, preserving order
    pub const fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// The process-wide built-in table, initialized on first use
    pub fn builtin() -> &'static Self {
        &BUILTIN_TABLE
    }

    /// Look up a palette by name, ignoring ASCII case
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Palette names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(Palette::name)
    }

    /// All palettes in table order
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Number of palettes
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether the table has no palettes
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Pick one palette uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPalette`] if the table is empty
    pub fn choose(&self, rng: &mut RandomSource) -> Result<&Palette> {
        rng.pick(&self.palettes)
            .ok_or_else(|| PatternError::EmptyPalette {
                name: "<palette table>".to_string(),
            })
    }

    /// Resolve a palette name hint, or pick one at random without a hint
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::UnknownPalette`] if the hint matches nothing,
    /// or [`PatternError::EmptyPalette`] if the table is empty
    pub fn resolve(&self, hint: Option<&str>, rng: &mut RandomSource) -> Result<&Palette> {
        match hint {
            Some(name) => self.get(name).ok_or_else(|| PatternError::UnknownPalette {
                name: name.to_string(),
            }),
            None => self.choose(rng),
        }
    }
}

/// Pick a background color uniformly from the dark background palette
///
/// # Errors
///
/// Returns an error if the palette is empty or the picked entry does not parse
pub fn choose_background(rng: &mut RandomSource) -> Result<Rgb> {
    let value = rng
        .pick(BACKGROUND_PALETTE)
        .ok_or_else(|| PatternError::EmptyPalette {
            name: "background".to_string(),
        })?;
    Rgb::parse(value)
}

// Every entry keeps its brightest channel at or below 0x40 so shapes contrast
/// Dark tones used for pattern backgrounds
pub const BACKGROUND_PALETTE: &[&str] = &[
    "#0f0f0f", "#121212", "#141414", "#161616", "#181818",
    "#1a1a1a", "#1c1c1c", "#1e1e1e", "#202020", "#212121",
    "#242424", "#262626", "#282828", "#2a2a2a", "#2c2c2c",
    "#2d2d2d", "#2f2f2f", "#313131", "#333333", "#353535",
    "#0d1117", "#161b22", "#21262d", "#30363d", "#0f172a",
    "#1e293b", "#1a0d1a", "#2d1b2d", "#3d2a3d", "#0d1a0d",
    "#1a2d1a", "#2a3d2a", "#052e16", "#1a0f0d", "#2d1a16",
    "#3d2a24", "#1a0d0d", "#2d1616", "#3d2424", "#1c1917",
    "#292524",
];

/// Built-in named palettes, twenty colors each
pub const BUILTIN_PALETTES: &[(&str, &[&str])] = &[
    (
        "teal",
        &[
            "#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A",
            "#00695C", "#004D40", "#A7F3D0", "#6EE7B7", "#34D399",
            "#10B981", "#059669", "#047857", "#065F46", "#064E3B",
            "#B2F5EA", "#7DD3FC", "#38BDF8", "#0EA5E9", "#0284C7",
        ],
    ),
    (
        "yellow",
        &[
            "#FFFDE7", "#FFF9C4", "#FFF59D", "#FFF176", "#FFEE58",
            "#F57F17", "#FF8F00", "#FFC107", "#FFD54F", "#FFECB3",
            "#FFF8E1", "#F9A825", "#F59E0B", "#D97706", "#B45309",
            "#92400E", "#78350F", "#451A03", "#FEF3C7", "#FDE68A",
        ],
    ),
    (
        "blue",
        &[
            "#E3F2FD", "#BBDEFB", "#90CAF9", "#64B5F6", "#42A5F5",
            "#1976D2", "#0D47A1", "#81D4FA", "#4FC3F7", "#29B6F6",
            "#03A9F4", "#0288D1", "#0277BD", "#01579B", "#0F172A",
            "#1E293B", "#334155", "#475569", "#DBEAFE", "#BFDBFE",
        ],
    ),
    (
        "pink",
        &[
            "#FCE4EC", "#F8BBD9", "#F48FB1", "#F06292", "#EC407A",
            "#C2185B", "#880E4F", "#F8BBD9", "#F48FB1", "#F06292",
            "#EC407A", "#E91E63", "#DB2777", "#BE185D", "#9D174D",
            "#831843", "#500724", "#FDF2F8", "#FCE7F3", "#FBCFE8",
        ],
    ),
    (
        "purple",
        &[
            "#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC",
            "#7B1FA2", "#4A148C", "#D1C4E9", "#B39DDB", "#9575CD",
            "#7E57C2", "#673AB7", "#5B21B6", "#4C1D95", "#581C87",
            "#3B0764", "#1E1B4B", "#312E81", "#F3E8FF", "#E9D5FF",
        ],
    ),
    (
        "grey",
        &[
            "#F5F5F5", "#EEEEEE", "#E0E0E0", "#BDBDBD", "#9E9E9E",
            "#616161", "#424242", "#FAFAFA", "#F0F0F0", "#E8E8E8",
            "#D0D0D0", "#A0A0A0", "#808080", "#606060", "#404040",
            "#202020", "#0F0F0F", "#F8FAFC", "#F1F5F9", "#E2E8F0",
        ],
    ),
    (
        "mint",
        &[
            "#E6FFFA", "#B2F5EA", "#81E6D9", "#4FD1C7", "#38B2AC",
            "#00695C", "#004D40", "#A7F3D0", "#6EE7B7", "#34D399",
            "#10B981", "#059669", "#047857", "#065F46", "#064E3B",
            "#B2F5EA", "#7DD3FC", "#38BDF8", "#0EA5E9", "#0284C7",
        ],
    ),
    (
        "coral",
        &[
            "#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350",
            "#D32F2F", "#B71C1C", "#FFCDD2", "#EF9A9A", "#E57373",
            "#EF5350", "#F44336", "#E11D48", "#BE123C", "#9F1239",
            "#881337", "#4C0519", "#FEF2F2", "#FEE2E2", "#FECACA",
        ],
    ),
    (
        "emerald",
        &[
            "#E8F5E8", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A",
            "#4CAF50", "#388E3C", "#2E7D32", "#1B5E20", "#E0F2E0",
            "#B8E6B8", "#90EE90", "#16A34A", "#15803D", "#166534",
            "#14532D", "#052E16", "#F0FDF4", "#DCFCE7", "#BBF7D0",
        ],
    ),
    (
        "lavender",
        &[
            "#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC",
            "#9C27B0", "#7B1FA2", "#6A1B9A", "#4A148C", "#E8DAEF",
            "#D1C4E9", "#B39DDB", "#8B5CF6", "#7C3AED", "#6D28D9",
            "#5B21B6", "#4C1D95", "#F5F3FF", "#EDE9FE", "#DDD6FE",
        ],
    ),
    (
        "peach",
        &[
            "#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726",
            "#FF9800", "#F57C00", "#EF6C00", "#E65100", "#FFE0B2",
            "#FFCC80", "#FFB74D", "#F59E0B", "#D97706", "#B45309",
            "#92400E", "#78350F", "#FEF3C7", "#FDE68A", "#FCD34D",
        ],
    ),
    (
        "aqua",
        &[
            "#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA",
            "#00BCD4", "#00ACC1", "#0097A7", "#00838F", "#B2EBF2",
            "#80DEEA", "#4DD0E1", "#06B6D4", "#0891B2", "#0E7490",
            "#155E75", "#164E63", "#F0FDFA", "#CCFBF1", "#99F6E4",
        ],
    ),
    (
        "gold",
        &[
            "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24",
            "#F59E0B", "#D97706", "#B45309", "#92400E", "#78350F",
            "#451A03", "#FFD700", "#FFA500", "#FF8C00", "#FF7F50",
            "#FF6347", "#FF4500", "#FFD700", "#FFA500", "#FF8C00",
        ],
    ),
    (
        "silver",
        &[
            "#F8FAFC", "#F1F5F9", "#E2E8F0", "#CBD5E1", "#94A3B8",
            "#64748B", "#475569", "#334155", "#1E293B", "#0F172A",
            "#C0C0C0", "#A8A8A8", "#909090", "#787878", "#606060",
            "#484848", "#303030", "#E5E7EB", "#D1D5DB", "#9CA3AF",
        ],
    ),
    (
        "bronze",
        &[
            "#FEF7ED", "#FED7AA", "#FDBA74", "#FB923C", "#F97316",
            "#EA580C", "#DC2626", "#B91C1C", "#991B1B", "#7F1D1D",
            "#CD7F32", "#B8860B", "#DAA520", "#B8860B", "#CD853F",
            "#D2691E", "#A0522D", "#8B4513", "#654321", "#3E2723",
        ],
    ),
    (
        "neon",
        &[
            "#00FF00", "#00FFFF", "#FF00FF", "#FFFF00", "#FF0080",
            "#8000FF", "#00FF80", "#FF8000", "#0080FF", "#80FF00",
            "#FF0080", "#8000FF", "#00FF80", "#FF8000", "#0080FF",
            "#80FF00", "#FF0080", "#8000FF", "#00FF80", "#FF8000",
        ],
    ),
    (
        "pastel",
        &[
            "#FFE4E1", "#FFD1DC", "#FFB6C1", "#FFA0B4", "#FF91A4",
            "#FFB6C1", "#FFC0CB", "#FFCCCB", "#FFD1DC", "#FFE4E1",
            "#E6E6FA", "#D8BFD8", "#DDA0DD", "#DA70D6", "#EE82EE",
            "#F0E68C", "#F5DEB3", "#FFE4B5", "#FFEFD5", "#FFF8DC",
        ],
    ),
    (
        "dark",
        &[
            "#1A1A1A", "#2D2D2D", "#404040", "#525252", "#666666",
            "#7A7A7A", "#8E8E8E", "#A2A2A2", "#B6B6B6", "#CACACA",
            "#0D1117", "#161B22", "#21262D", "#30363D", "#484F58",
            "#6E7681", "#8B949E", "#A8B2BF", "#C9D1D9", "#F0F6FC",
        ],
    ),
    (
        "bright",
        &[
            "#FF0000", "#FF4000", "#FF8000", "#FFBF00", "#FFFF00",
            "#BFFF00", "#80FF00", "#40FF00", "#00FF00", "#00FF40",
            "#00FF80", "#00FFBF", "#00FFFF", "#00BFFF", "#0080FF",
            "#0040FF", "#0000FF", "#4000FF", "#8000FF", "#BF00FF",
        ],
    ),
    (
        "nature",
        &[
            "#228B22", "#32CD32", "#00FF00", "#7CFC00", "#ADFF2F",
            "#9ACD32", "#6B8E23", "#556B2F", "#8FBC8F", "#90EE90",
            "#98FB98", "#8FBC8F", "#2E8B57", "#3CB371", "#20B2AA",
            "#48D1CC", "#40E0D0", "#00CED1", "#00BFFF", "#87CEEB",
        ],
    ),
];
