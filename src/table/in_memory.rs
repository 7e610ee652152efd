use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::Relaxed;
use crate::error::{DbError, DbResult};
use crate::index::{AnyIndex, Index, IndexType};
use crate::scheme::Schema;
use crate::types::{KeyType, Tuple};
use crate::{info, trace};

/// Counter for naming the result tables of relational operators.
static COUNT: AtomicUsize = AtomicUsize::new(0);

/// An in-memory relation: a list of tuples plus a primary-key index mapping each key
/// to the position of its tuple.
pub struct Table {
    pub(crate) schema: Schema,
    pub(crate) tuples: Vec<Tuple>,
    pub(crate) index: AnyIndex<KeyType, usize>,
}

impl Table {
    /// Creates an empty table from space separated attribute, domain and key lists.
    pub fn create(name: &str, attributes: &str, domains: &str, key: &str, index_type: IndexType) -> DbResult<Table> {
        let schema = Schema::parse(name, attributes, domains, key)?;
        info!("DDL> create table {} ({})", name, attributes);
        Table::from_schema(schema, index_type)
    }

    pub fn from_schema(schema: Schema, index_type: IndexType) -> DbResult<Table> {
        Ok(Table {
            schema,
            tuples: Vec::new(),
            index: AnyIndex::new(index_type)?,
        })
    }

    /// Creates a table holding `tuples` and indexes them. When several tuples share a key,
    /// the index points at the last one. Tuples with a null key column are not indexed.
    pub fn with_tuples(schema: Schema, tuples: Vec<Tuple>, index_type: IndexType) -> DbResult<Table> {
        let mut table = Table::from_schema(schema, index_type)?;
        let key_cols = table.schema.key_cols()?;
        for (row, tuple) in tuples.iter().enumerate() {
            match KeyType::new(extract(tuple, &key_cols)) {
                Ok(key) => {
                    table.index.put(key, row);
                }
                Err(_) => {
                    trace!("{}: row {} has a null key and is not indexed", table.schema.name, row);
                }
            }
        }
        table.tuples = tuples;
        Ok(table)
    }

    #[inline(always)]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline(always)]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    #[inline(always)]
    pub fn index_type(&self) -> IndexType {
        self.index.index_type()
    }

    /// Column position of an attribute.
    #[inline(always)]
    pub fn col(&self, attribute: &str) -> Option<usize> {
        self.schema.col(attribute)
    }

    /// Builds the primary key of a tuple of this table.
    pub fn key_of(&self, tuple: &Tuple) -> DbResult<KeyType> {
        let key_cols = self.schema.key_cols()?;
        KeyType::new(extract(tuple, &key_cols))
    }

    /// Inserts a tuple after checking its arity and domains.
    ///
    /// A tuple whose key is already present replaces the stored one.
    pub fn insert(&mut self, tuple: Tuple) -> DbResult<()> {
        info!("DML> insert into {} values ( {} )", self.schema.name, join_values(&tuple));
        self.type_check(&tuple)?;
        let key = self.key_of(&tuple)?;

        match self.find_row(&key)? {
            Some(row) => self.tuples[row] = tuple,
            None => {
                self.index.put(key, self.tuples.len());
                self.tuples.push(tuple);
            }
        }
        Ok(())
    }

    /// Row holding `key`: an index lookup, or a scan of the tuples when there is no index.
    fn find_row(&self, key: &KeyType) -> DbResult<Option<usize>> {
        if let IndexType::NoMap = self.index.index_type() {
            let key_cols = self.schema.key_cols()?;
            return Ok(self
                .tuples
                .iter()
                .position(|t| extract(t, &key_cols).as_slice() == key.values()));
        }
        Ok(self.index.get(key))
    }

    /// Selects the tuple with the given key through the index.
    ///
    /// Without an index the tuples are scanned instead.
    pub fn select_key(&self, key: &KeyType) -> DbResult<Table> {
        info!("RA> {}.select ({})", self.schema.name, key);

        let mut rows = Vec::with_capacity(1);
        if let Some(row) = self.find_row(key)? {
            rows.push(self.tuples[row].clone());
        }

        self.derive(self.schema.clone(), rows)
    }

    /// Checks the arity of a tuple and the domain of each of its values.
    pub fn type_check(&self, tuple: &Tuple) -> DbResult<()> {
        if tuple.len() != self.schema.arity() {
            return Err(DbError::TypeMismatch(format!(
                "{} expects {} values, got {}", self.schema.name, self.schema.arity(), tuple.len()
            )));
        }
        for (j, (value, domain)) in tuple.iter().zip(self.schema.domains.iter()).enumerate() {
            if !domain.admits(value) {
                return Err(DbError::TypeMismatch(format!(
                    "{}: value {} of {} is not a {}", self.schema.name, value, self.schema.attributes[j], domain
                )));
            }
        }
        Ok(())
    }

    /// Name for the next result table.
    pub(crate) fn next_name(&self) -> String {
        format!("{}{}", self.schema.name, COUNT.fetch_add(1, Relaxed))
    }

    /// Result table of an operator, indexed the same way as this one.
    pub(crate) fn derive(&self, mut schema: Schema, tuples: Vec<Tuple>) -> DbResult<Table> {
        schema.name = self.next_name();
        Table::with_tuples(schema, tuples, self.index.index_type())
    }

    pub fn print(&self) {
        let width = "---------------".repeat(self.schema.arity());
        println!("\n Table {}", self.schema.name);
        println!("|-{}-|", width);
        let header: String = self.schema.attributes.iter().map(|a| format!("{:>15}", a)).collect();
        println!("| {} |", header);
        println!("|-{}-|", width);
        for tuple in self.tuples.iter() {
            let row: String = tuple.iter().map(|v| format!("{:>15}", v.to_string())).collect();
            println!("| {} |", row);
        }
        println!("|-{}-|", width);
    }

    pub fn print_index(&self) {
        println!("\n Index for {} ({} entries, capacity {})", self.schema.name, self.index.count(), self.index.size());
        println!("-------------------");
        let mut entries = self.index.entries();
        entries.sort();
        for (key, row) in entries {
            println!("{} -> [ {} ]", key, join_values(&self.tuples[row]));
        }
        println!("-------------------");
    }
}

/// Picks the values at `cols` out of a tuple.
#[inline(always)]
pub(crate) fn extract(tuple: &Tuple, cols: &[usize]) -> Tuple {
    cols.iter().map(|&c| tuple[c].clone()).collect()
}

pub(crate) fn join_values(tuple: &Tuple) -> String {
    tuple.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
