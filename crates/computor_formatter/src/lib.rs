//! Human-readable rendering of reduced equations and their solutions.
//!
//! Rendering produces [`Line`]s made of role-tagged segments; turning roles
//! into terminal colors is left to a [`Styler`].

pub mod line;
pub mod render;
pub mod style;

pub use line::{Line, Segment};
pub use render::{
    degree_line, format_number, format_value, ordinal, reduced_form_line, render,
    solution_lines, RenderOptions, Rendered,
};
pub use style::{AnsiStyler, PlainStyler, Role, Styler};
