pub mod ast;
pub mod check;
pub mod comment;
pub mod fold;
pub mod rule;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod source_tests;
