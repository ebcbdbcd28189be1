use parley_derive::parley_error;

#[parley_error]
pub enum LoadError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
