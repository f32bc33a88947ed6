pub mod config;

pub mod state {
    pub mod consent;
    pub mod lightbox;
    pub mod menu;
    pub mod page;
    pub mod router;
    pub mod scroll;
}

pub mod dom {
    pub mod analytics;
    pub mod browser;
    pub mod cookies;
}

pub mod components {
    pub mod back_to_top;
    pub mod cookie_banner;
    pub mod gallery;
    pub mod hero;
    pub mod lightbox;
    pub mod nav;
    pub mod preloader;
}

pub mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
}

mod app;

pub use app::App;
