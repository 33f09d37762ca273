mod form;
mod list;
mod record;

pub use form::{edit_form, new_form};
pub use list::list;
pub use record::{create, delete, update};
