// File: crates/chart-core/src/theme.rs
// Summary: Color palette cycled by series index.

/// Ordered, immutable list of color tokens assigned to series by index.
///
/// Indices wrap modulo the palette length, so any number of series renders
/// with a finite set of colors. The palette is carried inside
/// [`crate::RenderOptions`]; independent renders can use independent palettes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Color token for series index `idx`, wrapping modulo the length.
    pub fn color(&self, idx: usize) -> &str {
        if self.colors.is_empty() {
            return "#000000";
        }
        &self.colors[idx % self.colors.len()]
    }

    /// Wrapped index, used for `set<N>`/`lineset<N>` class names.
    pub fn index(&self, idx: usize) -> usize {
        if self.colors.is_empty() { 0 } else { idx % self.colors.len() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            [
                "#268bd2", // blue
                "#2aa198", // cyan
                "#859900", // green
                "#b58900", // yellow
                "#cb4b16", // orange
                "#dc322f", // red
                "#d33682", // magenta
                "#6c71c4", // violet
                "#839496", // gray
            ]
            .map(String::from)
            .to_vec(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_nine_entries() {
        assert_eq!(Palette::default().len(), 9);
    }

    #[test]
    fn color_wraps_modulo_length() {
        let p = Palette::default();
        assert_eq!(p.color(0), p.color(9));
        assert_eq!(p.index(10), 1);
    }
}
