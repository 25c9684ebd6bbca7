// Content pipeline: raw scraped posting text → description / requirements /
// benefits sections. Pure functions only; nothing here touches the DB.

pub mod entities;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
