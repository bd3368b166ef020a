pub use self::app::App;

mod app;
mod localization;
mod utils;
