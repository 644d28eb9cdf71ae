//! Feature slices of the sign-in screen.

pub mod form;
