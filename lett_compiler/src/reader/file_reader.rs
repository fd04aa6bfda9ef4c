//! Chunked file character source
//!
//! The file is read in fixed-size chunks. Lookahead that fits in the loaded
//! chunk is answered in place; deeper lookahead takes a [`SourceSnapshot`],
//! reads forward destructively (loading chunks as needed) and reinstates the
//! snapshot before returning.

use super::{is_accepted, Reader, ReaderError};
use crate::config::runtime::ReaderPreferences;
use crate::logging::codes;
use crate::utils::Position;
use crate::{log_debug, log_error};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Complete mutable state of a [`FileReader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnapshot {
    file_offset: u64,
    chunk: Vec<u8>,
    chunk_pos: usize,
    chunk_len: usize,
    eof: bool,
    position: Position,
}

impl SourceSnapshot {
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Reader over a file loaded one chunk at a time
#[derive(Debug)]
pub struct FileReader {
    path: PathBuf,
    file: File,
    chunk: Vec<u8>,
    chunk_size: usize,
    /// Next unread byte in `chunk`
    chunk_pos: usize,
    /// Valid bytes in `chunk`
    chunk_len: usize,
    /// Bytes pulled from the file so far; the OS cursor sits here
    file_offset: u64,
    /// The file has no data beyond the loaded chunk
    eof: bool,
    position: Position,
}

impl FileReader {
    /// Open `path` with the configured chunk size
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        let chunk_size = ReaderPreferences::default().effective_chunk_size();
        Self::with_chunk_size(path, chunk_size)
    }

    /// Open `path` reading `chunk_size` bytes at a time
    pub fn with_chunk_size<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self, ReaderError> {
        let path = path.as_ref();

        if chunk_size == 0 {
            return Err(ReaderError::invalid_source(path, "chunk size must be at least 1"));
        }

        let metadata = std::fs::metadata(path).map_err(|e| ReaderError::from_io(path, &e))?;
        if metadata.is_dir() {
            return Err(ReaderError::invalid_source(path, "is a directory"));
        }

        let file = File::open(path).map_err(|e| ReaderError::from_io(path, &e))?;

        let mut reader = Self {
            path: path.to_path_buf(),
            file,
            chunk: vec![0; chunk_size],
            chunk_size,
            chunk_pos: 0,
            chunk_len: 0,
            file_offset: 0,
            eof: false,
            position: Position::origin(),
        };
        reader
            .load_chunk()
            .map_err(|e| ReaderError::from_io(path, &e))?;

        log_debug!("Opened file source",
            "path" => path.display(),
            "size_bytes" => metadata.len(),
            "chunk_size" => chunk_size
        );

        Ok(reader)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Capture everything `read` can change
    pub fn snapshot(&self) -> SourceSnapshot {
        SourceSnapshot {
            file_offset: self.file_offset,
            chunk: self.chunk[..self.chunk_len].to_vec(),
            chunk_pos: self.chunk_pos,
            chunk_len: self.chunk_len,
            eof: self.eof,
            position: self.position,
        }
    }

    /// Reinstate a snapshot taken from this reader
    pub fn restore(&mut self, snapshot: SourceSnapshot) -> Result<(), ReaderError> {
        if self.file_offset != snapshot.file_offset {
            self.file
                .seek(SeekFrom::Start(snapshot.file_offset))
                .map_err(|e| ReaderError::from_io(&self.path, &e))?;
            self.file_offset = snapshot.file_offset;
        }
        self.chunk[..snapshot.chunk_len].copy_from_slice(&snapshot.chunk);
        self.chunk_pos = snapshot.chunk_pos;
        self.chunk_len = snapshot.chunk_len;
        self.eof = snapshot.eof;
        self.position = snapshot.position;
        Ok(())
    }

    /// Replace the chunk with the next `chunk_size` bytes of the file
    fn load_chunk(&mut self) -> io::Result<()> {
        let mut filled = 0;
        while filled < self.chunk_size {
            match self.file.read(&mut self.chunk[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.file_offset += filled as u64;
        self.chunk_pos = 0;
        self.chunk_len = filled;
        self.eof = filled < self.chunk_size;
        Ok(())
    }

    fn next_byte(&mut self) -> Option<u8> {
        loop {
            if self.chunk_pos < self.chunk_len {
                let byte = self.chunk[self.chunk_pos];
                self.chunk_pos += 1;
                return Some(byte);
            }
            if self.eof {
                return None;
            }
            if let Err(e) = self.load_chunk() {
                log_error!(codes::reader::IO_ERROR, "Read failed; treating as end of input",
                    "path" => self.path.display(),
                    "offset" => self.file_offset,
                    "error" => e
                );
                self.chunk_pos = 0;
                self.chunk_len = 0;
                self.eof = true;
                return None;
            }
        }
    }

    /// Lookahead served from the loaded chunk alone
    fn peek_in_chunk(&self, n: usize) -> Option<char> {
        self.chunk[self.chunk_pos..self.chunk_len]
            .iter()
            .copied()
            .filter(|&byte| is_accepted(byte))
            .nth(n - 1)
            .map(char::from)
    }

    fn peek_across_chunks(&mut self, n: usize) -> Option<char> {
        let snapshot = self.snapshot();
        let mut result = None;
        for _ in 0..n {
            result = self.read();
            if result.is_none() {
                break;
            }
        }
        if let Err(e) = self.restore(snapshot) {
            log_error!(codes::system::INTERNAL_ERROR, "Could not rewind after lookahead",
                "path" => self.path.display(),
                "error" => e
            );
            self.eof = true;
            return None;
        }
        result
    }
}

impl Reader for FileReader {
    fn read(&mut self) -> Option<char> {
        loop {
            let byte = self.next_byte()?;
            if is_accepted(byte) {
                let ch = char::from(byte);
                self.position = self.position.advance(ch);
                return Some(ch);
            }
        }
    }

    fn peek(&mut self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        match self.peek_in_chunk(n) {
            Some(ch) => Some(ch),
            None if self.eof => None,
            None => self.peek_across_chunks(n),
        }
    }

    fn line(&self) -> usize {
        self.position.line
    }

    fn column(&self) -> usize {
        self.position.column
    }
}
