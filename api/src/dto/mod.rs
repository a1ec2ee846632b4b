mod requests;
mod responses;

pub use requests::{AdminQuery, PostForm, PublishRequest, UserForm};
pub use responses::{AdminScreen, AuthorOption, DialogView, Pane, TabLabel};
