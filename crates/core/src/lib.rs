pub mod config;
pub mod glossary;

pub use glossary::{featured_term, Glossary, TermCard, TermTag};
