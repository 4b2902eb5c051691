mod common;
mod scorer;
