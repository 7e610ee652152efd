mod console;
mod constants;
mod error;
mod index;
mod scheme;
mod settings;
mod table;
mod types;
#[cfg(test)]
mod tests;

use crate::error::DbResult;
use crate::index::LinHashMap;
use crate::settings::Config;
use crate::table::Table;
use crate::types::{KeyType, Value};

/// Inserts the odd keys up to `total_keys` mapped to their squares, dumps the chains and
/// looks every key up again.
fn lin_hash_demo(total_keys: i32) {
    let mut map = LinHashMap::new();
    for i in (1..=total_keys).step_by(2) {
        map.put(i, i * i);
    }

    map.print();
    for i in 0..=total_keys {
        match map.get(&i) {
            Some(value) => println!("key = {} value = {}", i, value),
            None => println!("key = {} value = null", i),
        }
    }
    println!("-------------------------------------------");
    let lookups = total_keys as usize + 1;
    println!("Average number of buckets accessed = {}", map.average_buckets_accessed(lookups));

    let stats = map.stats();
    println!(
        "keys = {}, capacity = {}, load factor = {:.3}, chains = {}, buckets = {}, mod1 = {}, mod2 = {}, isplit = {}, buckets accessed = {}",
        stats.key_count, map.size(), map.split_state().load_factor(), stats.chains, stats.buckets,
        stats.mod1, stats.mod2, stats.isplit, stats.buckets_accessed
    );
}

fn movie_demo(config: &Config) -> DbResult<()> {
    let mut movie = Table::create(
        "movie",
        "title year length genre studioName producerNo",
        "String Integer Integer String String Integer",
        "title year",
        config.index_type,
    )?;
    let mut cinema = Table::create(
        "cinema",
        "title year length genre studioName producerNo",
        "String Integer Integer String String Integer",
        "title year",
        config.index_type,
    )?;
    let mut studio = Table::create(
        "studio",
        "name address presNo",
        "String String Integer",
        "name",
        config.index_type,
    )?;

    movie.insert(tuple!["Star_Wars", 1977, 124, "sciFi", "Fox", 12345])?;
    movie.insert(tuple!["Star_Wars_2", 1980, 124, "sciFi", "Fox", 12345])?;
    movie.insert(tuple!["Rocky", 1985, 200, "action", "Universal", 12125])?;
    movie.insert(tuple!["Rambo", 1978, 100, "action", "Universal", 32355])?;

    cinema.insert(tuple!["Rocky", 1985, 200, "action", "Universal", 12125])?;
    cinema.insert(tuple!["Rambo", 1978, 100, "action", "Universal", 32355])?;
    cinema.insert(tuple!["Galaxy_Quest", 1999, 104, "comedy", "DreamWorks", 67890])?;

    studio.insert(tuple!["Fox", "Los_Angeles", 7777])?;
    studio.insert(tuple!["Universal", "Universal_City", 8888])?;
    studio.insert(tuple!["DreamWorks", "Universal_City", 9999])?;

    movie.print();
    movie.print_index();
    cinema.print();
    studio.print();
    studio.print_index();

    movie.project("title year")?.print();

    let year = movie.col("year").unwrap_or(1);
    movie.select(|t| t[year] == Value::Integer(1977))?.print();
    movie.select(|t| matches!(t[year], Value::Integer(y) if y < 1980))?.print();

    let key = KeyType::new(vec![Value::from("Star_Wars_2"), Value::Integer(1980)])?;
    movie.select_key(&key)?.print();
    let missing = KeyType::new(vec![Value::from("Star_Wars_3"), Value::Integer(1983)])?;
    if movie.select_key(&missing)?.is_empty() {
        warn!("no movie with key {}", missing);
    }

    movie.union(&cinema)?.print();
    movie.minus(&cinema)?.print();
    movie.join("studioName", "name", &studio)?.print();
    movie.i_join("studioName", "name", &studio)?.print();
    movie.natural_join(&cinema)?.print();

    movie.save(&config.store_dir)?;
    let loaded = Table::load(&config.store_dir, "movie", config.index_type)?;
    if loaded.tuples() != movie.tuples() {
        warn!("reloaded movie table differs from the saved one");
    }
    success!("reloaded {} tuples keyed on ({})", loaded.len(), loaded.schema().key.join(" "));
    loaded.select_key(&key)?.print();
    Ok(())
}

fn main() {
    console::start_message();
    let config = Config::new();
    console::set_trace(config.trace);

    lin_hash_demo(40);
    if let Err(err) = movie_demo(&config) {
        error!("movie demo failed: {}", err);
        std::process::exit(1);
    }
    success!("done");
}
