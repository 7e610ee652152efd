use serde::{Deserialize, Serialize};
use crate::error::{DbError, DbResult};
use crate::scheme::domain::{domain_from_string, Domain};

/// Metadata of a relation: attribute names, their domains and the primary key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: String,
    pub attributes: Vec<String>,
    pub domains: Vec<Domain>,
    pub key: Vec<String>,
}

impl Schema {
    pub fn new(name: &str, attributes: Vec<String>, domains: Vec<Domain>, key: Vec<String>) -> DbResult<Self> {
        if attributes.len() != domains.len() {
            return Err(DbError::InvalidArgument(format!(
                "{} attributes but {} domains", attributes.len(), domains.len()
            )));
        }
        if key.is_empty() {
            return Err(DbError::invalid_argument("primary key has no attributes"));
        }
        if let Some(missing) = key.iter().find(|k| !attributes.contains(k)) {
            return Err(DbError::UnknownAttribute(missing.clone()));
        }

        Ok(Self {
            name: name.to_string(),
            attributes,
            domains,
            key,
        })
    }

    /// Parses space separated lists, e.g. `("movie", "title year", "String Integer", "title year")`.
    pub fn parse(name: &str, attributes: &str, domains: &str, key: &str) -> DbResult<Self> {
        let domains = split_names(domains)
            .iter()
            .map(|d| domain_from_string(d))
            .collect::<DbResult<Vec<Domain>>>()?;
        Self::new(name, split_names(attributes), domains, split_names(key))
    }

    /// Column position of an attribute.
    #[inline(always)]
    pub fn col(&self, attribute: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == attribute)
    }

    /// Column positions of several attributes; fails on the first unknown one.
    pub fn cols(&self, attributes: &[String]) -> DbResult<Vec<usize>> {
        attributes
            .iter()
            .map(|a| self.col(a).ok_or_else(|| DbError::UnknownAttribute(a.clone())))
            .collect()
    }

    #[inline(always)]
    pub fn key_cols(&self) -> DbResult<Vec<usize>> {
        self.cols(&self.key)
    }

    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// Same arity and the same domain at every position.
    pub fn check_compatible(&self, other: &Schema) -> DbResult<()> {
        if self.arity() != other.arity() {
            return Err(DbError::Incompatible(format!(
                "{} and {} have different arity", self.name, other.name
            )));
        }
        if let Some(j) = (0..self.arity()).find(|&j| self.domains[j] != other.domains[j]) {
            return Err(DbError::Incompatible(format!(
                "{} and {} disagree on domain {}", self.name, other.name, j
            )));
        }
        Ok(())
    }
}

pub fn split_names(names: &str) -> Vec<String> {
    names.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_the_key_and_domains() {
        let schema = Schema::parse("movie", "title year length", "String Integer Integer", "title year").unwrap();
        assert_eq!(schema.key_cols().unwrap(), vec![0, 1]);
        assert_eq!(schema.col("length"), Some(2));

        assert!(matches!(
            Schema::parse("movie", "title year", "String Integer", "studio"),
            Err(DbError::UnknownAttribute(_))
        ));
        assert!(matches!(
            Schema::parse("movie", "title", "Text", "title"),
            Err(DbError::UnknownDomain(_))
        ));
        assert!(matches!(
            Schema::parse("movie", "title year", "String", "title"),
            Err(DbError::InvalidArgument(_))
        ));
    }
}
