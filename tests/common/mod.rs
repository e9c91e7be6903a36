//! Common test utilities for sqx-installer integration tests

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Marker files of a StrategyQuant X installation
pub const SQX_MARKERS: [&str; 3] = ["StrategyQuantX.exe", "sqcli.exe", "CodeEditor.exe"];

/// Marker folders of a MetaTrader 5 data folder
pub const MT5_MARKERS: [&str; 3] = ["MQL5", "bases", "config"];

/// Scripts, SQX and MT5 folders in one temporary directory
#[allow(dead_code)]
pub struct TestSetup {
    /// Temporary directory
    pub temp: TempDir,
    pub scripts: PathBuf,
    pub sqx: PathBuf,
    pub mt5: PathBuf,
}

#[allow(dead_code)]
impl TestSetup {
    /// Create valid (empty) SQX and MT5 folders and an empty scripts folder
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let scripts = temp.path().join("downloads");
        let sqx = temp.path().join("StrategyQuantX");
        let mt5 = temp.path().join("MT5");

        fs::create_dir_all(&scripts).expect("Failed to create scripts folder");
        fs::create_dir_all(&sqx).expect("Failed to create SQX folder");
        for marker in SQX_MARKERS {
            fs::write(sqx.join(marker), b"").expect("Failed to write SQX marker");
        }
        for marker in MT5_MARKERS {
            fs::create_dir_all(mt5.join(marker)).expect("Failed to create MT5 marker");
        }

        Self {
            temp,
            scripts,
            sqx,
            mt5,
        }
    }

    /// Write a file under the scripts folder
    pub fn write_script(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.scripts.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a `.sxp` archive under the scripts folder
    pub fn write_archive(&self, path: &str, entries: &[(&str, &str)]) -> PathBuf {
        let file_path = self.scripts.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = fs::File::create(&file_path).expect("Failed to create archive");
        let mut zip = zip::ZipWriter::new(file);
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default())
                .expect("Failed to start archive entry");
            zip.write_all(content.as_bytes())
                .expect("Failed to write archive entry");
        }
        zip.finish().expect("Failed to finish archive");
        file_path
    }

    /// Mark `path` (relative to the SQX folder) as built-in content
    pub fn write_internal(&self, path: &str) {
        let file_path = self.sqx.join("internal").join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(file_path, "built in").expect("Failed to write internal file");
    }

    /// Read a file relative to the SQX folder
    pub fn read_sqx(&self, path: &str) -> String {
        fs::read_to_string(self.sqx.join(path)).expect("Failed to read file")
    }

    pub fn sqx_exists(&self, path: &str) -> bool {
        self.sqx.join(path).exists()
    }

    pub fn mt5_exists(&self, path: &str) -> bool {
        self.mt5.join(path).exists()
    }

    /// Write an `sqx-installer.yaml` pointing at this setup into `dir`
    pub fn write_config(&self, dir: &Path, with_mt5: bool) -> PathBuf {
        let mut yaml = format!(
            "scripts: {}\nsqx: {}\n",
            self.scripts.display(),
            self.sqx.display()
        );
        if with_mt5 {
            yaml.push_str(&format!("mt5: {}\n", self.mt5.display()));
        }
        let path = dir.join("sqx-installer.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}
