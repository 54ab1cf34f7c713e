// src/markup/mod.rs  —  Search-mode document rewriting + element rendering
pub mod annotate;
pub mod lexer;
pub mod render;

pub use annotate::{annotate, Annotated};
pub use render::{render, stylesheet_link};
