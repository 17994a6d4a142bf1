// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

mod codegen;

use std::error::Error;
use std::path::{Path, PathBuf};

use log::debug;

/// Driver for one header-generation run: reads the input file and emits a
/// C++ array-literal declaration embedding its bytes.
pub struct Generator {
    name: String,
    input: PathBuf,
}

impl Generator {
    pub fn new<P>(name: &str, input: P) -> Self
    where
        P: AsRef<Path>,
    {
        Generator {
            name: name.to_string(),
            input: input.as_ref().to_path_buf(),
        }
    }

    /// Generate the declaration and write it to stdout.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        print!("{}", self.generate()?);
        Ok(())
    }

    /// Read the input file and render the declaration text.
    ///
    /// The file is read in full; an unreadable input propagates the I/O
    /// error to the caller.
    pub fn generate(&self) -> Result<String, Box<dyn Error>> {
        let contents = std::fs::read(&self.input)?;
        debug!(
            "embedding {} bytes from {} as '{}'",
            contents.len(),
            self.input.display(),
            self.name
        );

        Ok(codegen::header(&self.name, &contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fixture_codegen_{name}_{}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn generates_from_file() {
        let path = scratch_file("small", &[0xde, 0xad, 0xbe, 0xef]);
        let output = Generator::new("blob", &path).generate().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            output,
            "namespace json_tests{\n\
             \x20  static unsigned const char blob[] = { // 4\n\
             0xde, 0xad, 0xbe, 0xef,\n\
             \x20};\n\
             };\n"
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let gen = Generator::new("nope", "/definitely/not/a/real/path");
        assert!(gen.generate().is_err());
    }
}
