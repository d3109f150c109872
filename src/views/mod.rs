// Screen/page components
pub mod about;

pub use about::AboutPanel;
