//! Size-based rotating log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Append-only log file that rolls over once a record would push it past
/// `max_bytes`. With `backup_count == 0` it never rolls over.
///
/// Rolled files are named `<file>.1` (newest) through `<file>.<backup_count>`
/// (oldest); anything older is discarded. Each record is written while the
/// lock is held, so concurrent writers never interleave within a record.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    file: File,
    len: u64,
}

impl RotatingFile {
    /// Open (or create) `path` for appending. `max_bytes == 0` disables
    /// rotation.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backup_count: u32) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let len = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            state: Mutex::new(State { file, len }),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `index`-th rolled file.
    #[must_use]
    pub fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Current size of the active file in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.state.lock().len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write one complete record, rolling over first if needed.
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock();
        if self.should_roll_over(state.len, record.len()) {
            self.roll_over(&mut state)?;
        }
        state.file.write_all(record)?;
        state.len += record.len() as u64;
        Ok(())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.state.lock().file.flush()
    }

    // No backups means nowhere to roll to, so the file just grows.
    fn should_roll_over(&self, current: u64, incoming: usize) -> bool {
        self.max_bytes > 0
            && self.backup_count > 0
            && current > 0
            && current + incoming as u64 > self.max_bytes
    }

    fn roll_over(&self, state: &mut State) -> io::Result<()> {
        state.file.flush()?;

        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                if dst.exists() {
                    fs::remove_file(&dst)?;
                }
                fs::rename(&src, &dst)?;
            }
        }
        let newest = self.backup_path(1);
        if newest.exists() {
            fs::remove_file(&newest)?;
        }
        fs::rename(&self.path, &newest)?;

        state.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        state.len = 0;
        Ok(())
    }
}

impl Write for &RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        RotatingFile::flush(self)
    }
}
