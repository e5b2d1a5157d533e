use acsreport::{config::Config, DiskCache, FetchRequest};
use std::{env, path::PathBuf, process::exit};

fn main() {
    // Optional argument: cache directory. Falls back to the configured one.
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [CACHE_DIR]", args[0]);
        exit(1);
    }
    if let Err(e) = inspect(args.get(1).map(PathBuf::from)) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Print one line per cached fetch: when, how many rows, and what was asked.
fn inspect(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match dir {
        Some(d) => d,
        None => Config::load(None)?
            .cache_dir
            .ok_or("no cache directory given and none configured")?,
    };
    let cache = DiskCache::new(&dir)?;
    let entries = cache.entries()?;

    println!("=== Cache: {} ({} entries) ===", dir.display(), entries.len());
    for entry in entries {
        let when = entry
            .fetched_at
            .map_or("<unknown>".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string());
        // Keys are serialized requests; show them readably when they parse.
        let what = serde_json::from_str::<FetchRequest>(&entry.key)
            .map(|r| r.to_string())
            .unwrap_or(entry.key);
        println!("{:<20} | {:>6} rows | {}", when, entry.rows, what);
        println!("  {}", entry.path.display());
    }
    Ok(())
}
