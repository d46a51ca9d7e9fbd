mod app;
pub mod scene;
pub mod theme;

pub use app::CountdownApp;
