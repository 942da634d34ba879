/// Opaque sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Channel values used for malformed color input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Number of color stops in every [`Gradient`].
pub const GRADIENT_STOPS: usize = 3;

/// Three-stop background gradient. Serializes as an array of `#rrggbb` strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Gradient(pub [Rgb8; GRADIENT_STOPS]);

/// Fallback gradient when no section supplies one (the page's from/via/to background).
pub const DEFAULT_GRADIENT: Gradient = Gradient([
    Rgb8::new(0x30, 0x04, 0x58),
    Rgb8::new(0x2a, 0xa0, 0xd6),
    Rgb8::new(0x03, 0x13, 0x43),
]);

impl Default for Gradient {
    fn default() -> Self {
        DEFAULT_GRADIENT
    }
}

impl Gradient {
    /// Build a gradient from its three stops.
    pub const fn new(stops: [Rgb8; GRADIENT_STOPS]) -> Self {
        Self(stops)
    }

    /// The three stops in order.
    pub fn stops(&self) -> &[Rgb8; GRADIENT_STOPS] {
        &self.0
    }

    /// Fill a possibly short or sparse slot list up to exactly three stops.
    ///
    /// `None` slots and slots past the end take the matching stop from `fallback`;
    /// anything beyond the third slot is ignored.
    pub fn resolve(slots: &[Option<Rgb8>], fallback: &Gradient) -> Self {
        let mut stops = fallback.0;
        for (stop, slot) in stops.iter_mut().zip(slots) {
            if let Some(c) = slot {
                *stop = *c;
            }
        }
        Self(stops)
    }
}

impl From<[(u8, u8, u8); GRADIENT_STOPS]> for Gradient {
    fn from(stops: [(u8, u8, u8); GRADIENT_STOPS]) -> Self {
        Self(stops.map(Rgb8::from))
    }
}

/// A named page region that starts at `boundary` and paints `gradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Unique section identifier (the anchor id on the page).
    pub id: String,
    /// Scroll offset where this section begins.
    pub boundary: f64,
    /// Background gradient while this section is current.
    pub gradient: Gradient,
}

impl Section {
    /// Build a section.
    pub fn new(id: impl Into<String>, boundary: f64, gradient: Gradient) -> Self {
        Self {
            id: id.into(),
            boundary,
            gradient,
        }
    }
}

/// A scroll notification from the event source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Current scroll offset of the viewport's leading edge.
    pub offset: f64,
    /// Viewport extent along the scroll axis.
    pub viewport_extent: f64,
}

impl ScrollEvent {
    /// Build a scroll event.
    pub fn new(offset: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            viewport_extent,
        }
    }

    /// The sampling point: offset plus half the viewport.
    pub fn midpoint(self) -> f64 {
        self.offset + self.viewport_extent / 2.0
    }
}

/// A layout-supplied `(section id, boundary offset)` pair.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBoundary {
    /// Section the offset belongs to.
    pub id: String,
    /// Freshly measured start offset.
    pub offset: f64,
}

impl SectionBoundary {
    /// Build a boundary update.
    pub fn new(id: impl Into<String>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
