//! Form feature: fields, editing, and the per-tab views.

mod field;
mod render;
mod update;

pub use field::{Field, FieldFocus, FieldHint, check_registration};
pub use render::render_form;
pub use update::handle_edit_key;
