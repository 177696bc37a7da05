mod app;
mod cmd;
mod utils;
pub(crate) mod err;

pub use app::App;
