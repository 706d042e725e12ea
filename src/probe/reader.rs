use crate::probe::error::ProbeError;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Result of pulling a whole file into memory.
///
/// Every variant must be handled before any byte of the content is looked at;
/// [`ReadOutcome::into_result`] is the usual way to do that.
#[derive(Debug)]
pub enum ReadOutcome {
    Content(Vec<u8>),
    OpenError(io::Error),
    AllocError { requested: u64 },
    ReadError(io::Error),
}

impl ReadOutcome {
    pub fn into_result(self, path: &Path) -> Result<Vec<u8>, ProbeError> {
        match self {
            ReadOutcome::Content(bytes) => Ok(bytes),
            ReadOutcome::OpenError(source) => Err(ProbeError::FileOpen {
                path: path.to_path_buf(),
                source,
            }),
            ReadOutcome::AllocError { requested } => Err(ProbeError::Allocation { requested }),
            ReadOutcome::ReadError(source) => Err(ProbeError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Read the full file at `path`, sizing the buffer from the seek length.
pub fn read_contents(path: &Path) -> ReadOutcome {
    let mut f = match File::open(path) {
        Ok(f) => f,
        Err(e) => return ReadOutcome::OpenError(e),
    };

    // Directories open fine on Unix but report a bogus seek length.
    match f.metadata() {
        Ok(meta) if !meta.is_file() => {
            return ReadOutcome::ReadError(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ))
        }
        Ok(_) => {}
        Err(e) => return ReadOutcome::ReadError(e),
    }

    let len = match file_length(&mut f) {
        Ok(len) => len,
        Err(e) => return ReadOutcome::ReadError(e),
    };
    tracing::debug!(path = %path.display(), len, "file length");

    let Some(mut buf) = allocate(len) else {
        return ReadOutcome::AllocError { requested: len };
    };
    // read_to_end may still grow the buffer if the file grew after the seek.
    match f.read_to_end(&mut buf) {
        Ok(_) => ReadOutcome::Content(buf),
        Err(e) => ReadOutcome::ReadError(e),
    }
}

fn file_length(f: &mut File) -> io::Result<u64> {
    let len = f.seek(SeekFrom::End(0))?;
    f.seek(SeekFrom::Start(0))?;
    Ok(len)
}

fn allocate(len: u64) -> Option<Vec<u8>> {
    let len = usize::try_from(len).ok()?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"\x00\x01\x02\x03\xff").unwrap();

        match read_contents(&path) {
            ReadOutcome::Content(bytes) => assert_eq!(bytes, b"\x00\x01\x02\x03\xff"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_empty_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();

        let bytes = read_contents(&path).into_result(&path).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope");

        let outcome = read_contents(&path);
        assert!(matches!(outcome, ReadOutcome::OpenError(_)));
        let err = outcome.into_result(&path).unwrap_err();
        assert!(matches!(err, ProbeError::FileOpen { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempdir().unwrap();
        let outcome = read_contents(dir.path());
        assert!(matches!(outcome, ReadOutcome::ReadError(_)), "{outcome:?}");
        let err = outcome.into_result(dir.path()).unwrap_err();
        assert!(matches!(err, ProbeError::Read { .. }));
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn impossible_allocation_is_reported() {
        assert!(allocate(u64::MAX).is_none());
        let err = ReadOutcome::AllocError { requested: u64::MAX }
            .into_result(Path::new("x"))
            .unwrap_err();
        assert!(matches!(err, ProbeError::Allocation { requested } if requested == u64::MAX));
    }

    #[test]
    fn allocation_reserves_exact_capacity() {
        let buf = allocate(64).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 64);
    }
}
