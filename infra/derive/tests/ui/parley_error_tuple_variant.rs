use parley_derive::parley_error;

#[parley_error]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
