//! A [`ResultReader`] for files written by [`ActorCsvSink`](crate::ActorCsvSink).

use std::path::{Path, PathBuf};

use mc_sim::ResultReader;

use crate::OutputResult;

/// One actor output file, loaded as text cells.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActorTable {
    pub actor:   String,
    pub path:    PathBuf,
    pub columns: Vec<String>,
    pub rows:    Vec<Vec<String>>,
}

impl ActorTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Loads each handed-off output into an [`ActorTable`].
#[derive(Copy, Clone, Debug, Default)]
pub struct CsvTableReader;

impl ResultReader for CsvTableReader {
    type Output = OutputResult<ActorTable>;

    fn read(&mut self, output_path: &Path, actor_name: &str) -> Self::Output {
        let mut rdr = csv::Reader::from_path(output_path)?;
        let columns = rdr.headers()?.iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.map(|rec| rec.iter().map(str::to_owned).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok(ActorTable {
            actor: actor_name.to_owned(),
            path: output_path.to_path_buf(),
            columns,
            rows,
        })
    }
}
