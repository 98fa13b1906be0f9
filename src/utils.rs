use std::{fs, io};

use crate::error::{ErrorKind, IOError, Result, XmlError};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            XmlError::new(ErrorKind::IO(IOError::FileNotFound(path.to_string()))).with_source(e)
        }
        io::ErrorKind::PermissionDenied => {
            XmlError::new(ErrorKind::IO(IOError::PermissionDenied(path.to_string())))
                .with_source(e)
        }
        _ => XmlError::new(ErrorKind::IO(IOError::ReadError(path.to_string()))).with_source(e),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            XmlError::new(ErrorKind::IO(IOError::FileNotFound(path.to_string()))).with_source(e)
        }
        io::ErrorKind::PermissionDenied => {
            XmlError::new(ErrorKind::IO(IOError::PermissionDenied(path.to_string())))
                .with_source(e)
        }
        _ => XmlError::new(ErrorKind::IO(IOError::WriteError(path.to_string()))).with_source(e),
    })
}
