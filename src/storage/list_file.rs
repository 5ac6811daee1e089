//! Save and load of the comma-separated list file.
//!
//! One task per line: `name,priority,completed`, decimal integers, no
//! padding. Lines are written in the store's current order, so a save after
//! listing persists priority order. File handles are scoped to each call
//! and closed on every exit path.
//!
//! Loading is deliberately lenient about numbers (atoi-style: leading
//! digits, 0 on total failure, no range check against the 1-3 priority
//! levels) but strict about shape: the first line that does not yield three
//! fields with a non-empty name fails the whole load from that point.
//! Tasks appended from earlier lines stay in the store; there is no
//! rollback.

use crate::error::{Result, TaskrError};
use crate::store::TaskStore;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write the store's tasks to `path`, truncating any existing file.
///
/// A failure partway through writing can leave a truncated file; there is
/// no rollback. The store itself is never touched.
pub fn save(store: &TaskStore, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for task in store.tasks() {
        writeln!(writer, "{},{},{}", task.name, task.priority, task.completed)?;
    }
    writer.flush()?;
    info!("saved {} tasks to {}", store.len(), path.display());
    Ok(())
}

/// Read `path` line by line, appending each task to `store`.
///
/// A missing or unopenable file propagates as an I/O error; the caller
/// decides whether that means "abort the open" or "start fresh". The store
/// is appended to as lines parse, so a malformed line mid-file leaves the
/// earlier lines' tasks in place.
pub fn load(store: &mut TaskStore, path: &Path) -> Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split(',');
        let (Some(name), Some(priority), Some(completed)) =
            (fields.next(), fields.next(), fields.next())
        else {
            warn!("malformed line {} in {}, stopping load", index + 1, path.display());
            return Err(TaskrError::MalformedLine(index + 1));
        };
        // An empty name can never come from a save; treat it as the same
        // formatting failure as a short line. Fields past the third are
        // ignored.
        if name.is_empty() {
            warn!("empty name on line {} in {}, stopping load", index + 1, path.display());
            return Err(TaskrError::MalformedLine(index + 1));
        }
        store.restore(name, parse_leading_int(priority), parse_leading_int(completed))?;
    }

    info!("loaded {} tasks from {}", store.len(), path.display());
    Ok(())
}

/// atoi-style integer parse: skip leading whitespace, take an optional
/// sign and then leading digits; anything else yields 0.
fn parse_leading_int(field: &str) -> i32 {
    let field = field.trim_start();
    let (negative, rest) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };

    let mut value: i32 = 0;
    let mut saw_digit = false;
    for c in rest.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        saw_digit = true;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit as i32)) {
            Some(v) => v,
            None => return 0,
        };
    }

    if !saw_digit {
        0
    } else if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn list_path(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join("todo.txt")
    }

    #[test]
    fn test_save_writes_one_line_per_task() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);

        let mut store = TaskStore::new();
        store.add("Buy milk", 2).unwrap();
        store.add("Write report", 1).unwrap();
        save(&store, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Buy milk,2,0\nWrite report,1,0\n");
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "stale,1,0\nstale two,2,0\n").unwrap();

        let mut store = TaskStore::new();
        store.add("fresh", 3).unwrap();
        save(&store, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh,3,0\n");
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("todo.txt");

        let store = TaskStore::new();
        let err = save(&store, &path).unwrap_err();
        assert!(matches!(err, TaskrError::Io(_)));
    }

    #[test]
    fn test_load_round_trip_preserves_order_and_fields() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);

        let mut store = TaskStore::new();
        store.add("Buy milk", 2).unwrap();
        store.add("Write report", 1).unwrap();
        store.add("Call dentist", 3).unwrap();
        save(&store, &path).unwrap();

        let mut reloaded = TaskStore::new();
        load(&mut reloaded, &path).unwrap();

        assert_eq!(reloaded.tasks(), store.tasks());
    }

    #[test]
    fn test_load_missing_file_propagates() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::new();
        let err = load(&mut store, &temp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, TaskrError::Io(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_second_line_keeps_first() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "good task,1,0\nonly,two\nnever reached,3,0\n").unwrap();

        let mut store = TaskStore::new();
        let err = load(&mut store, &path).unwrap_err();

        assert!(matches!(err, TaskrError::MalformedLine(2)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].name, "good task");
    }

    #[test]
    fn test_load_blank_line_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "task one,1,0\n\ntask two,2,0\n").unwrap();

        let mut store = TaskStore::new();
        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, TaskrError::MalformedLine(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_empty_name_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, ",2,0\n").unwrap();

        let mut store = TaskStore::new();
        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, TaskrError::MalformedLine(1)));
    }

    #[test]
    fn test_load_ignores_fields_past_the_third() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "task,1,0,extra,extra\n").unwrap();

        let mut store = TaskStore::new();
        load(&mut store, &path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].priority, 1);
    }

    #[test]
    fn test_load_lenient_numbers() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        // Non-numeric priority parses to 0, out-of-range priority loads
        // untouched, and completed survives verbatim.
        fs::write(&path, "no number,abc,0\nhand edited,7,5\npartial,2x,0\n").unwrap();

        let mut store = TaskStore::new();
        load(&mut store, &path).unwrap();

        assert_eq!(store.tasks()[0].priority, 0);
        assert_eq!(store.tasks()[1].priority, 7);
        assert_eq!(store.tasks()[1].completed, 5);
        assert_eq!(store.tasks()[2].priority, 2);
    }

    #[test]
    fn test_load_appends_to_existing_store() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "from file,1,0\n").unwrap();

        let mut store = TaskStore::new();
        store.add("already here", 2).unwrap();
        load(&mut store, &path).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].name, "already here");
        assert_eq!(store.tasks()[1].name, "from file");
    }

    #[test]
    fn test_load_empty_file_yields_empty_store() {
        let temp = TempDir::new().unwrap();
        let path = list_path(&temp);
        fs::write(&path, "").unwrap();

        let mut store = TaskStore::new();
        load(&mut store, &path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  7"), 7);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("+5"), 5);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("99999999999999999999"), 0);
    }
}
