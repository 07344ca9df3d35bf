use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// Map the "-" stdio marker to `None`.
pub fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Open a buffered reader on a path; "-" reads stdin.
pub fn open_path_reader(path: &str) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    Ok(if path == "-" {
        Box::new(BufReader::new(std::io::stdin().lock()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    })
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        open_path_reader(squash_standard_io(&self.input).unwrap_or("-"))
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("vocab.json".to_string())),
            Some("vocab.json")
        );
    }
}
