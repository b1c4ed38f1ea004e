use super::{Collection, DataStore, Record, RecordStore};
use crate::config::AssistantConfig;
use crate::error::{OstapError, Result};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = AssistantConfig::default();
        Self {
            root,
            contacts_file: defaults.contacts_file,
            notes_file: defaults.notes_file,
        }
    }

    pub fn with_config(mut self, config: &AssistantConfig) -> Self {
        self.contacts_file = config.contacts_file.clone();
        self.notes_file = config.notes_file.clone();
        self
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        let file = match collection {
            Collection::Contacts => &self.contacts_file,
            Collection::Notes => &self.notes_file,
        };
        self.root.join(file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(OstapError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load<R: Record>(&self) -> Result<RecordStore<R>> {
        let path = self.collection_path(R::COLLECTION);
        if !path.exists() {
            log::debug!("{} does not exist yet, starting empty", path.display());
            return Ok(RecordStore::new());
        }
        let content = fs::read_to_string(&path).map_err(OstapError::Io)?;
        let records = RecordStore::from_json(&content)?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn save<R: Record>(&mut self, records: &RecordStore<R>) -> Result<()> {
        self.ensure_dir()?;
        let path = self.collection_path(R::COLLECTION);
        let content = records.to_json()?;

        // Write next to the target, then rename over it.
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        fs::write(&tmp, content).map_err(OstapError::Io)?;
        fs::rename(&tmp, &path).map_err(OstapError::Io)?;

        log::debug!("saved {} records to {}", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Name, Note, Phone};
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("not-created"));
        let contacts = store.load::<Contact>().unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn save_creates_directory_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested");
        let mut store = FileStore::new(root.clone());

        let mut notes = RecordStore::new();
        notes.add_note("hello #world");
        store.save(&notes).unwrap();

        assert!(root.join("notebook.json").exists());
        assert!(!root.join("notebook.json.tmp").exists());
        assert_eq!(store.load::<Note>().unwrap(), notes);
    }

    #[test]
    fn collections_use_configured_file_names() {
        let dir = TempDir::new().unwrap();
        let config = AssistantConfig {
            contacts_file: "people.json".into(),
            ..AssistantConfig::default()
        };
        let mut store = FileStore::new(dir.path().to_path_buf()).with_config(&config);

        let contacts: RecordStore<Contact> = [Contact::new(Name::new("Ann").unwrap())
            .with_phone(Phone::new("380501234567").unwrap())]
        .into_iter()
        .collect();
        store.save(&contacts).unwrap();

        assert!(dir.path().join("people.json").exists());
        assert_eq!(store.load::<Contact>().unwrap(), contacts);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.json"), "{ not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load::<Contact>(),
            Err(OstapError::Serialization(_))
        ));
    }
}
