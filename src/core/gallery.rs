//! Gallery media and lightbox state
//!
//! The lightbox is a small state machine over a fixed item count:
//!
//! ```text
//! Closed --open(i)--> Open(i) --next--> Open((i + 1) mod N)
//!                     Open(i) --previous--> Open((i - 1 + N) mod N)
//!                     Open(i) --close--> Closed
//! ```

/// Kind of media shown in a gallery tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: &'static str,
}

impl MediaItem {
    const fn image(url: &'static str) -> Self {
        Self {
            kind: MediaKind::Image,
            url,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

pub const GALLERY: &[MediaItem] = &[
    MediaItem::image("/images/gallery1.webp"),
    MediaItem::image("/images/gallery2.jpeg"),
    MediaItem::image("/images/gallery3.png"),
    MediaItem::image("/images/gallery4.png"),
    MediaItem::image("/images/gallery5.png"),
    MediaItem::image("/images/gallery6.jpeg"),
    MediaItem::image("/images/gallery7.jpeg"),
    MediaItem::image("/images/gallery8.jpeg"),
    MediaItem::image("/images/gallery9.jpeg"),
];

/// Alt text for the item at `index`
pub fn alt_text(index: usize) -> String {
    format!("Gallery {}", index + 1)
}

/// Grid footprint of a gallery tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLayout {
    /// Spans two columns and two rows on medium screens
    Feature,
    /// Spans two rows on medium screens
    Tall,
    Regular,
}

impl TileLayout {
    /// Every 7th tile is featured, every 5th otherwise is tall
    pub fn for_index(index: usize) -> Self {
        if index % 7 == 0 {
            TileLayout::Feature
        } else if index % 5 == 0 {
            TileLayout::Tall
        } else {
            TileLayout::Regular
        }
    }

    pub fn span_class(&self) -> &'static str {
        match self {
            TileLayout::Feature => "md:col-span-2 md:row-span-2",
            TileLayout::Tall => "md:row-span-2",
            TileLayout::Regular => "",
        }
    }

    pub fn aspect_ratio(&self) -> &'static str {
        match self {
            TileLayout::Tall => "1/1.5",
            TileLayout::Feature | TileLayout::Regular => "1",
        }
    }
}

/// Keys the lightbox responds to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    /// Maps a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Close),
            "ArrowLeft" => Some(LightboxKey::Previous),
            "ArrowRight" => Some(LightboxKey::Next),
            _ => None,
        }
    }
}

/// Open/closed flag and current index for the gallery overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    item_count: usize,
    is_open: bool,
    current_index: usize,
}

impl Lightbox {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            is_open: false,
            current_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Opens at `index`; out-of-range indices are ignored
    pub fn open(&mut self, index: usize) {
        if index < self.item_count {
            self.current_index = index;
            self.is_open = true;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) {
        if self.is_open && self.item_count > 0 {
            self.current_index = (self.current_index + 1) % self.item_count;
        }
    }

    pub fn previous(&mut self) {
        if self.is_open && self.item_count > 0 {
            self.current_index = (self.current_index + self.item_count - 1) % self.item_count;
        }
    }

    /// Applies a key press; returns whether the key was handled
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            LightboxKey::Close => self.close(),
            LightboxKey::Previous => self.previous(),
            LightboxKey::Next => self.next(),
        }
        true
    }

    /// 1-based position, e.g. "4 / 9"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.item_count)
    }

    /// The item currently on display, if open
    pub fn current<'a>(&self, items: &'a [MediaItem]) -> Option<&'a MediaItem> {
        if self.is_open {
            items.get(self.current_index)
        } else {
            None
        }
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(GALLERY.len())
    }
}
