//! Activity gallery (static content).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub views: u32,
}

pub const GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        id: 1,
        image: "gambar1.jpg",
        title: "Sosialisasi Sensus Penduduk 2025",
        date: "1 Mei 2025",
        views: 256,
    },
    GalleryItem {
        id: 2,
        image: "gambar2.jpg",
        title: "Workshop Pengolahan Data Statistik",
        date: "1 April 2025",
        views: 189,
    },
    GalleryItem {
        id: 3,
        image: "gambar3.jpg",
        title: "Pelatihan Enumerator Survei Ekonomi",
        date: "1 Maret 2025",
        views: 342,
    },
    GalleryItem {
        id: 4,
        image: "gambar4.jpg",
        title: "Rapat Koordinasi Statistik Daerah",
        date: "1 Februari 2025",
        views: 178,
    },
    GalleryItem {
        id: 5,
        image: "gambar5.jpg",
        title: "Launching Aplikasi Mobile BPS",
        date: "1 Januari 2025",
        views: 423,
    },
    GalleryItem {
        id: 6,
        image: "gambar6.jpg",
        title: "Seminar Nasional Statistik 2024",
        date: "1 Desember 2024",
        views: 567,
    },
];

/// Cursor and shown item. The first item is shown on entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    pub cursor: usize,
    pub shown: usize,
    pub popup_open: bool,
}

impl GalleryState {
    pub fn items(&self) -> &'static [GalleryItem] {
        &GALLERY_ITEMS
    }

    pub fn shown_item(&self) -> &'static GalleryItem {
        &GALLERY_ITEMS[self.shown.min(GALLERY_ITEMS.len() - 1)]
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(GALLERY_ITEMS.len() - 1);
    }

    pub fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % GALLERY_ITEMS.len();
    }

    /// Show the item under the cursor. Returns `false` when it is already shown.
    pub fn select(&mut self) -> bool {
        if self.cursor == self.shown {
            return false;
        }
        self.shown = self.cursor;
        true
    }

    pub fn open_popup(&mut self) {
        self.popup_open = true;
    }

    pub fn close_popup(&mut self) -> bool {
        std::mem::replace(&mut self.popup_open, false)
    }
}
