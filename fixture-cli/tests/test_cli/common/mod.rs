use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};


pub use data::{
    md5_hex, CHUNK_PATTERN, EMPTY_MD5, ONE_MB_MD5, TWO_MB_MD5, USAGE_ERROR_STATUS,
};

/// Returns the path to one of the binaries built by cargo.
///
/// # Panics
///
/// Panics if the binary is not part of this package.
fn binary_path(name: &str) -> &'static str {
    match name {
        "gen-blob" => env!("CARGO_BIN_EXE_gen-blob"),
        "schema-chain" => env!("CARGO_BIN_EXE_schema-chain"),
        other => panic!("Binary '{other}' is not built by this package"),
    }
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        Self { root_dir }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        fixture
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Read a file from the fixture as text
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or is not UTF-8.
    pub fn read_to_string(&self, name: &str) -> String {
        fs::read_to_string(self.root_dir.path().join(name)).unwrap()
    }

    /// Sorted names of all entries in a fixture subdirectory (`""` for the root)
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be read.
    pub fn list(&self, subdir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root_dir.path().join(subdir))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run a cargo binary with the fixture root as working directory
    pub async fn run_cargo(&mut self, name: &str, args: &[&str]) -> Output {
        let dir = self.root_dir.path().to_path_buf();
        self.run_in(name, args, dir).await
    }

    /// Run a cargo binary with a custom environment variable set
    pub async fn run_cargo_with_env(
        &mut self,
        name: &str,
        args: &[&str],
        env: (&str, &str),
    ) -> Output {
        let output = tokio::process::Command::new(binary_path(name))
            .args(args)
            .current_dir(self.root_dir.path())
            .env(env.0, env.1)
            .stdin(Stdio::null())
            .output()
            .await
            .unwrap();

        Self::convert(output)
    }

    /// Run a binary with the specified arguments inside `dir`
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    async fn run_in(&mut self, name: &str, args: &[&str], dir: PathBuf) -> Output {
        // wait_with_output reads stdout/stderr while waiting, so full pipes cannot deadlock.
        let output = tokio::process::Command::new(binary_path(name))
            .args(args)
            .current_dir(dir)
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap()
            .wait_with_output()
            .await
            .unwrap();

        Self::convert(output)
    }

    fn convert(raw_output: std::process::Output) -> Output {
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
