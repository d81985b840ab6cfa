use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

pub(crate) fn read_content(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("`{file_path:?}` does not contain valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read `{file_path:?}`: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{0:?}` is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::FileDecodeError { file_path: a_path, err: a_err },
                Self::FileDecodeError { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err == b_err,

            (
                Self::FileReadError { file_path: a_path, err: a_err },
                Self::FileReadError { file_path: b_path, err: b_err },
            ) => a_path == b_path && a_err.kind() == b_err.kind(),

            (Self::PathIsNotAFile(a_path), Self::PathIsNotAFile(b_path))
                => a_path == b_path,

            _ => false,
        }
    }
}
