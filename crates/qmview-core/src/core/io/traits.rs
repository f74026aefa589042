use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing a display model file format.
///
/// Implementors handle format-specific parsing and serialization; the path helpers
/// are provided on top of the reader/writer methods.
pub trait ModelFile {
    /// The display model this format carries.
    type Model;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a model from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Model, Self::Error>;

    /// Writes a model to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(model: &Self::Model, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a model from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Model, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a model to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(model: &Self::Model, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(model, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
