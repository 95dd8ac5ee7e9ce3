// Reader screen

pub mod view;

pub use view::{render_placeholder, render_reader};
