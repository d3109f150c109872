// Reusable UI components

pub mod dialog;
pub mod progress_ring;

pub use dialog::open_info_dialog;
pub use progress_ring::progress_ring;
