use crate::core::io::traits::ModelFile;
use crate::core::models::energy::CircuitDisplayModel;
use crate::core::models::molecule::MoleculeModel;
use std::io::{self, BufRead, Write};
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Pretty-printed JSON encoding of a display model.
pub struct JsonFile<M>(PhantomData<M>);

pub type MoleculeJson = JsonFile<MoleculeModel>;
pub type CircuitJson = JsonFile<CircuitDisplayModel>;

impl<M> ModelFile for JsonFile<M>
where
    M: serde::Serialize + serde::de::DeserializeOwned,
{
    type Model = M;
    type Error = JsonError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Model, Self::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_to(model: &Self::Model, writer: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *writer, model)?;
        writeln!(writer)?;
        Ok(())
    }
}
