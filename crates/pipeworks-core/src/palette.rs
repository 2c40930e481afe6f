//! Ordered color palettes.
//!
//! A palette fixes both the set of pipe colors and the order the growth
//! engine moves through them. Entries are named so a renderer can map
//! them onto textures; the [`Rgb`] value is only a display hint.

use crate::error::PaletteError;
use crate::id::ColorId;
use indexmap::IndexMap;
use std::fmt;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An ordered, non-empty set of uniquely named colors.
///
/// # Examples
///
/// ```
/// use pipeworks_core::{ColorId, Palette, Rgb};
///
/// let p = Palette::new([("red", Rgb::new(255, 0, 0)), ("blue", Rgb::new(0, 0, 255))]).unwrap();
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.successor(ColorId(0)), Some(ColorId(1)));
/// assert_eq!(p.successor(ColorId(1)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: IndexMap<String, Rgb>,
}

impl Palette {
    /// Build a palette from `(name, color)` pairs in progression order.
    ///
    /// Returns [`PaletteError::Empty`] for no entries,
    /// [`PaletteError::DuplicateName`] if a name repeats, and
    /// [`PaletteError::TooManyColors`] past `u16::MAX` entries.
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, rgb) in entries {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(PaletteError::DuplicateName { name });
            }
            map.insert(name, rgb);
        }
        if map.is_empty() {
            return Err(PaletteError::Empty);
        }
        if map.len() > u16::MAX as usize {
            return Err(PaletteError::TooManyColors { count: map.len() });
        }
        Ok(Self { entries: map })
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always returns `false`: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The color every run starts with.
    pub fn first(&self) -> ColorId {
        ColorId::FIRST
    }

    /// The color after `id`, or `None` once the palette is exhausted.
    pub fn successor(&self, id: ColorId) -> Option<ColorId> {
        let next = id.index() + 1;
        (next < self.entries.len()).then(|| ColorId(next as u16))
    }

    /// Name of the color, if `id` belongs to this palette.
    pub fn name(&self, id: ColorId) -> Option<&str> {
        self.entries.get_index(id.index()).map(|(n, _)| n.as_str())
    }

    /// Display color, if `id` belongs to this palette.
    pub fn rgb(&self, id: ColorId) -> Option<Rgb> {
        self.entries.get_index(id.index()).map(|(_, c)| *c)
    }

    /// Look a color up by name.
    pub fn id_of(&self, name: &str) -> Option<ColorId> {
        self.entries.get_index_of(name).map(|i| ColorId(i as u16))
    }

    /// Iterate `(id, name, rgb)` in progression order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorId, &str, Rgb)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, rgb))| (ColorId(i as u16), name.as_str(), *rgb))
    }
}

impl Default for Palette {
    /// The four colors of the classic screensaver.
    fn default() -> Self {
        let entries = [
            ("teal", Rgb::new(0, 184, 169)),
            ("cream", Rgb::new(248, 243, 212)),
            ("rose", Rgb::new(246, 65, 108)),
            ("amber", Rgb::new(255, 222, 125)),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(n, c)| (n.to_string(), c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_four_ordered_colors() {
        let p = Palette::default();
        assert_eq!(p.len(), 4);
        let names: Vec<&str> = p.iter().map(|(_, n, _)| n).collect();
        assert_eq!(names, ["teal", "cream", "rose", "amber"]);
        assert_eq!(p.rgb(ColorId(2)), Some(Rgb::new(246, 65, 108)));
    }

    #[test]
    fn successor_walks_then_stops() {
        let p = Palette::default();
        let mut seen = vec![p.first()];
        while let Some(next) = p.successor(*seen.last().unwrap()) {
            seen.push(next);
        }
        assert_eq!(seen, [ColorId(0), ColorId(1), ColorId(2), ColorId(3)]);
    }

    #[test]
    fn rejects_empty() {
        let none: [(&str, Rgb); 0] = [];
        assert_eq!(Palette::new(none), Err(PaletteError::Empty));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Palette::new([("a", Rgb::new(0, 0, 0)), ("a", Rgb::new(1, 1, 1))]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::DuplicateName {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn lookup_by_name_and_out_of_range_id() {
        let p = Palette::default();
        assert_eq!(p.id_of("rose"), Some(ColorId(2)));
        assert_eq!(p.id_of("mauve"), None);
        assert_eq!(p.name(ColorId(9)), None);
        assert_eq!(p.rgb(ColorId(9)), None);
    }

    #[test]
    fn rgb_display_is_hex() {
        assert_eq!(Rgb::new(0, 184, 169).to_string(), "#00b8a9");
    }
}
