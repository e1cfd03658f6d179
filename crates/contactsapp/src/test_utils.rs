use crate::api::ContactsApi;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub api: ContactsApi<FsBackend>,
    pub log_path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let log_path = temp_dir.path().join("book").join("AddressBook.txt");
        let api = ContactsApi::new(FsBackend::new(log_path.clone()));
        Self {
            _temp_dir: temp_dir,
            api,
            log_path,
        }
    }
}
