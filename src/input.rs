use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Produces the stream of candidate names, one per input line. Reads the
/// given files front to back, or standard input when no files are named.
pub fn name_stream<F: AsRef<Path>>(files: &[F]) -> Result<Box<dyn Iterator<Item = String>>> {
    if files.is_empty() {
        log::debug!("reading names from stdin");
        return Ok(Box::new(io::stdin().lines().map_while(Result::ok)));
    }
    log::debug!("reading names from {} file(s)", files.len());

    let mut readers = Vec::with_capacity(files.len());
    for file in files {
        let reader = File::open(file)
            .map(BufReader::new)
            .with_context(|| format!("failed to open input file: {}", file.as_ref().display()))?;
        readers.push(reader);
    }
    Ok(Box::new(FileNames {
        readers,
        current: 0,
    }))
}

/// Iterates the lines of each input file in turn. A read error ends the
/// current file and moves on to the next.
struct FileNames {
    readers: Vec<BufReader<File>>,
    current: usize,
}

impl Iterator for FileNames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let reader = self.readers.get_mut(self.current)?;
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => self.current += 1,
                Ok(_) => {
                    while line.ends_with(['\n', '\r']) {
                        line.pop();
                    }
                    return Some(line);
                }
            }
        }
    }
}
