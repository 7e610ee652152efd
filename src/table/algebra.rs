use std::collections::HashSet;
use crate::error::{DbError, DbResult};
use crate::index::{Index, IndexType};
use crate::scheme::schema::split_names;
use crate::scheme::Schema;
use crate::table::in_memory::{extract, Table};
use crate::types::{KeyType, Tuple};
use crate::info;

impl Table {
    /// Keeps only the given attributes. The key survives if all of its attributes are kept,
    /// otherwise the projected attributes form the new key. Duplicate rows collapse.
    pub fn project(&self, attributes: &str) -> DbResult<Table> {
        info!("RA> {}.project ({})", self.schema.name, attributes);
        let attrs = split_names(attributes);
        let cols = self.schema.cols(&attrs)?;
        let domains = cols.iter().map(|&c| self.schema.domains[c]).collect();
        let key = if self.schema.key.iter().all(|k| attrs.contains(k)) {
            self.schema.key.clone()
        } else {
            attrs.clone()
        };

        let mut seen = HashSet::with_capacity(self.tuples.len());
        let mut rows = Vec::with_capacity(self.tuples.len());
        for tuple in self.tuples.iter() {
            let row = extract(tuple, &cols);
            if seen.insert(row.clone()) {
                rows.push(row);
            }
        }

        self.derive(Schema::new(&self.schema.name, attrs, domains, key)?, rows)
    }

    /// Keeps the tuples satisfying `predicate`.
    pub fn select<P>(&self, predicate: P) -> DbResult<Table>
        where P: Fn(&Tuple) -> bool
    {
        info!("RA> {}.select (<predicate>)", self.schema.name);
        let rows = self.tuples.iter().filter(|&t| predicate(t)).cloned().collect();
        self.derive(self.schema.clone(), rows)
    }

    /// Tuples of this table followed by the tuples of `other` that are not in this one.
    pub fn union(&self, other: &Table) -> DbResult<Table> {
        info!("RA> {}.union ({})", self.schema.name, other.schema.name);
        self.schema.check_compatible(&other.schema)?;

        let mine: HashSet<&Tuple> = self.tuples.iter().collect();
        let mut rows = self.tuples.clone();
        rows.extend(other.tuples.iter().filter(|t| !mine.contains(t)).cloned());

        self.derive(self.schema.clone(), rows)
    }

    /// Tuples of this table that are not in `other`.
    pub fn minus(&self, other: &Table) -> DbResult<Table> {
        info!("RA> {}.minus ({})", self.schema.name, other.schema.name);
        self.schema.check_compatible(&other.schema)?;

        let theirs: HashSet<&Tuple> = other.tuples.iter().collect();
        let rows = self.tuples.iter().filter(|t| !theirs.contains(t)).cloned().collect();

        self.derive(self.schema.clone(), rows)
    }

    /// Nested loop equi-join on `attributes1` of this table and `attributes2` of `other`.
    /// Attribute names of `other` that clash with this table's get a `2` suffix.
    pub fn join(&self, attributes1: &str, attributes2: &str, other: &Table) -> DbResult<Table> {
        info!("RA> {}.join ({}, {}, {})", self.schema.name, attributes1, attributes2, other.schema.name);
        let (cols1, cols2) = self.join_cols(attributes1, attributes2, other)?;

        let mut rows = Vec::new();
        for t in self.tuples.iter() {
            for u in other.tuples.iter() {
                if cols1.iter().zip(cols2.iter()).all(|(&i, &j)| t[i] == u[j]) {
                    rows.push(concat(t, u));
                }
            }
        }

        self.derive(self.joined_schema(other)?, rows)
    }

    /// Same result as `join`, but probes the index of `other` instead of scanning it.
    /// `attributes2` must be the primary key of `other`.
    pub fn i_join(&self, attributes1: &str, attributes2: &str, other: &Table) -> DbResult<Table> {
        info!("RA> {}.i_join ({}, {}, {})", self.schema.name, attributes1, attributes2, other.schema.name);
        let (cols1, _) = self.join_cols(attributes1, attributes2, other)?;
        if split_names(attributes2) != other.schema.key {
            return Err(DbError::Unsupported(format!(
                "index join needs the primary key of {}", other.schema.name
            )));
        }
        if let IndexType::NoMap = other.index_type() {
            return Err(DbError::Unsupported(format!("{} has no index", other.schema.name)));
        }

        let mut rows = Vec::new();
        for t in self.tuples.iter() {
            // A null foreign key matches nothing.
            let Ok(key) = KeyType::new(extract(t, &cols1)) else {
                continue;
            };
            if let Some(row) = other.index.get(&key) {
                rows.push(concat(t, &other.tuples[row]));
            }
        }

        self.derive(self.joined_schema(other)?, rows)
    }

    /// Joins on equality of all attributes the two tables share; shared columns appear once.
    pub fn natural_join(&self, other: &Table) -> DbResult<Table> {
        info!("RA> {}.join ({})", self.schema.name, other.schema.name);
        let common: Vec<(usize, usize)> = self
            .schema
            .attributes
            .iter()
            .enumerate()
            .filter_map(|(i, a)| other.col(a).map(|j| (i, j)))
            .collect();
        let rest: Vec<usize> = (0..other.schema.arity())
            .filter(|j| !common.iter().any(|(_, c)| c == j))
            .collect();

        let mut rows = Vec::new();
        for t in self.tuples.iter() {
            for u in other.tuples.iter() {
                if common.iter().all(|&(i, j)| t[i] == u[j]) {
                    let mut row = t.clone();
                    row.extend(extract(u, &rest));
                    rows.push(row);
                }
            }
        }

        let mut attributes = self.schema.attributes.clone();
        let mut domains = self.schema.domains.clone();
        for &j in rest.iter() {
            attributes.push(other.schema.attributes[j].clone());
            domains.push(other.schema.domains[j]);
        }
        let mut key = self.schema.key.clone();
        for k in other.schema.key.iter() {
            if !key.contains(k) {
                key.push(k.clone());
            }
        }

        self.derive(Schema::new(&self.schema.name, attributes, domains, key)?, rows)
    }

    fn join_cols(&self, attributes1: &str, attributes2: &str, other: &Table) -> DbResult<(Vec<usize>, Vec<usize>)> {
        let cols1 = self.schema.cols(&split_names(attributes1))?;
        let cols2 = other.schema.cols(&split_names(attributes2))?;
        if cols1.len() != cols2.len() {
            return Err(DbError::InvalidArgument(format!(
                "joining {} attributes with {}", cols1.len(), cols2.len()
            )));
        }
        Ok((cols1, cols2))
    }

    /// Schema of `self` concatenated with `other`, keyed by both primary keys.
    fn joined_schema(&self, other: &Table) -> DbResult<Schema> {
        let rename = |a: &String| {
            if self.schema.attributes.contains(a) {
                format!("{a}2")
            } else {
                a.clone()
            }
        };
        let mut attributes = self.schema.attributes.clone();
        attributes.extend(other.schema.attributes.iter().map(rename));
        let mut domains = self.schema.domains.clone();
        domains.extend(other.schema.domains.iter().copied());
        let mut key = self.schema.key.clone();
        key.extend(other.schema.key.iter().map(rename));

        Schema::new(&self.schema.name, attributes, domains, key)
    }
}

#[inline(always)]
fn concat(t: &Tuple, u: &Tuple) -> Tuple {
    let mut row = Vec::with_capacity(t.len() + u.len());
    row.extend_from_slice(t);
    row.extend_from_slice(u);
    row
}
