mod book;
mod common;
mod drives;
