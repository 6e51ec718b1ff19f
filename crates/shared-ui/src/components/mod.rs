// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod label;
pub mod navbar;
pub mod separator;
pub mod toast;

// Depends on button and separator
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dropdown_menu::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use toast::*;
