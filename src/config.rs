/// Google Analytics measurement id. Analytics stays disabled until a real id
/// is configured here.
pub const ANALYTICS_MEASUREMENT_ID: &str = "";

pub fn analytics_configured() -> bool {
    !ANALYTICS_MEASUREMENT_ID.is_empty()
}

/// Which UI features this build of the site wires up. The earlier per-site
/// script copies differed only in this set, so it is one struct instead of
/// parallel source files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    pub menu: bool,
    pub video_fallback: bool,
    pub back_to_top: bool,
    pub gallery: bool,
    pub lightbox: bool,
    pub hash_router: bool,
    pub cookie_banner: bool,
}

impl Features {
    pub const fn all() -> Self {
        Self {
            menu: true,
            video_fallback: true,
            back_to_top: true,
            gallery: true,
            lightbox: true,
            hash_router: true,
            cookie_banner: true,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}
