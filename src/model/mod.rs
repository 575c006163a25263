use thiserror::Error;

pub mod reference;
pub mod template;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading template descriptor toml: {0}")]
    IO(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid location annotation `{0}`, expected `<protocol>:<target>`")]
    InvalidLocationAnnotation(String),
    #[error("Missing url component `{0}` in string `{1}`")]
    MissingUrlComponent(String, String),
}
