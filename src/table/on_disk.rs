use std::fs::{DirBuilder, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::constants::paths::TABLE_EXT;
use crate::error::DbResult;
use crate::index::IndexType;
use crate::scheme::Schema;
use crate::table::Table;
use crate::types::Tuple;
use crate::{info, success};

#[derive(Serialize)]
struct TableFileRef<'a> {
    schema: &'a Schema,
    tuples: &'a [Tuple],
}

#[derive(Deserialize)]
struct TableFile {
    schema: Schema,
    tuples: Vec<Tuple>,
}

#[inline(always)]
fn table_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{TABLE_EXT}"))
}

impl Table {
    /// Writes the schema and tuples to `<dir>/<name>.dbf`. The index is not stored.
    pub fn save(&self, dir: &Path) -> DbResult<()> {
        DirBuilder::new().recursive(true).create(dir)?;
        let path = table_path(dir, &self.schema.name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, &TableFileRef {
            schema: &self.schema,
            tuples: &self.tuples,
        })?;
        writer.flush()?;
        success!("saved table {} ({} tuples) to {}", self.schema.name, self.tuples.len(), path.to_string_lossy());
        Ok(())
    }

    /// Reads a table written by `save` and rebuilds its index.
    pub fn load(dir: &Path, name: &str, index_type: IndexType) -> DbResult<Table> {
        let path = table_path(dir, name);
        let reader = BufReader::new(File::open(&path)?);
        let file: TableFile = serde_json::from_reader(reader)?;
        info!("loaded table {} ({} tuples) from {}", name, file.tuples.len(), path.to_string_lossy());
        Table::with_tuples(file.schema, file.tuples, index_type)
    }
}
