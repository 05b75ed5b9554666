mod common;

mod classification;
mod seasonal;
