//! The admin screen: one search box, a Users tab and a Posts tab, and a
//! modal form per entity type.

mod cards;
mod filter;
mod view;

pub use cards::{PREVIEW_LIMIT, PostAction, PostCard, UserAction, UserCard, preview};
pub use filter::{post_matches, user_matches};
pub use view::{AdminView, Dialog, FormMode, Tab};
